mod codec_error;
mod query_codec;
pub mod query_param;

pub use codec_error::CodecError;
pub use query_codec::QueryCodec;
