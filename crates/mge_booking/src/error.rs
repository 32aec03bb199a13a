use mge_common::MgeError;
use thiserror::Error;

/// Booking-specific error types.
#[derive(Error, Debug)]
pub enum BookingError {
    /// A slot's `start_time` could not be read as `HH:MM`
    #[error("Invalid slot time: '{0}'")]
    InvalidTime(String),

    /// Error returned by the backend API or the HTTP layer
    #[error(transparent)]
    Api(#[from] MgeError),
}

impl From<BookingError> for MgeError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidTime(value) => {
                MgeError::ParseError(format!("invalid slot time '{}'", value))
            }
            BookingError::Api(err) => err,
        }
    }
}
