use thiserror::Error;

// Define error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Coordinates must be within India's geographical bounds")]
    OutOfBounds { latitude: f64, longitude: f64 },
    #[error("Invalid radius: {0} km (expected 0.5 to 20 km)")]
    InvalidRadius(f64),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error stems from a bad request rather than a local fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinates { .. } | Error::OutOfBounds { .. } | Error::InvalidRadius(_)
        )
    }
}
