use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request to {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("failure decoding response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("invalid request url '{0}': {1}")]
    InvalidUrl(String, String),
    #[error("failure building http client: {0}")]
    Build(String),
}
