#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeodesyError {
    #[error("Unknown ellipsoid model: {0}")]
    KeyNotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = GeodesyError> = std::result::Result<T, E>;
