// Shared building blocks for the Medan Gaming crates.
pub mod envelope; // Backend response normalisation
pub mod error; // Error handling
pub mod http; // HTTP client context and axum error responses
pub mod logging; // Logging utilities
pub mod models; // Catalog and booking records

pub use error::{
    config_error, external_service_error, internal_error, not_found, validation_error, Context,
    HttpStatusCode, MgeError, Validate,
};

pub use envelope::{extract_payload, normalize, ResponseEnvelope};

pub use http::{
    client::{create_client, error_from_status, ApiClient, DEFAULT_TIMEOUT_SECS},
    handle_json_result, IntoHttpResponse,
};

pub use logging::{init, init_with_level, log_error, log_result, parse_level};
