use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("invalid coordinate '{0}', expected 'lat,lon'")]
    InvalidPoint(String),
    #[error("invalid latitude: {0}")]
    InvalidLatitude(String),
    #[error("invalid longitude: {0}")]
    InvalidLongitude(String),
    #[error("invalid ISO-8601 duration '{0}': {1}")]
    InvalidDuration(String, String),
    #[error("invalid url '{0}': {1}")]
    InvalidUrl(String, String),
}
