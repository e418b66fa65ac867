use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Maps API returned status {status}: {message}")]
    Status { status: String, message: String },
}
