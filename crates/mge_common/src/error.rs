use std::fmt;
use thiserror::Error;

/// The base error type shared by all Medan Gaming crates.
///
/// Crate-specific errors (e.g. `BookingError`) convert into this type so the
/// HTTP layer only has to know one error shape.
#[derive(Error, Debug)]
pub enum MgeError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The backend rejected the request as unauthenticated or forbidden
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation, locally or by the backend
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Error occurred due to rate limiting
    #[error("Rate limited: {0}")]
    RateLimitError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for MgeError {
    fn status_code(&self) -> u16 {
        match self {
            MgeError::HttpError(_) => 502,
            MgeError::ParseError(_) => 400,
            MgeError::ConfigError(_) => 500,
            MgeError::AuthError(_) => 401,
            MgeError::ValidationError(_) => 400,
            MgeError::ExternalServiceError { .. } => 502,
            MgeError::ConflictError(_) => 409,
            MgeError::NotFoundError(_) => 404,
            MgeError::TimeoutError(_) => 504,
            MgeError::RateLimitError(_) => 429,
            MgeError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, MgeError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, MgeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, MgeError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| internal_error(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, MgeError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| internal_error(format!("{}: {}", f(), error)))
    }
}

impl From<reqwest::Error> for MgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MgeError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            MgeError::ParseError(err.to_string())
        } else {
            MgeError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MgeError {
    fn from(err: serde_json::Error) -> Self {
        MgeError::ParseError(err.to_string())
    }
}

/// Local validation of request payloads before they are sent to the backend.
pub trait Validate {
    fn validate(&self) -> Result<(), MgeError>;
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> MgeError {
    MgeError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> MgeError {
    MgeError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> MgeError {
    MgeError::NotFoundError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> MgeError {
    MgeError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> MgeError {
    MgeError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(not_found("gone").status_code(), 404);
        assert_eq!(MgeError::AuthError("no".into()).status_code(), 401);
        assert_eq!(external_service_error("backend", "down").status_code(), 502);
        assert_eq!(MgeError::TimeoutError("slow".into()).status_code(), 504);
    }

    #[test]
    fn test_context_wraps_as_internal_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        match result.context("Failed to bind 127.0.0.1:8080") {
            Err(MgeError::InternalError(message)) => {
                assert_eq!(message, "Failed to bind 127.0.0.1:8080: address in use")
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
