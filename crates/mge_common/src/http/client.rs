use mge_config::ApiConfig;
use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::envelope::normalize;
use crate::error::{config_error, external_service_error, MgeError};

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Creates a new HTTP client with the given timeout.
pub fn create_client(timeout_secs: u64) -> Result<Client, MgeError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(MgeError::from)
}

/// Client context for the backend REST API.
///
/// Holds the HTTP client, the base URL and an optional static bearer token.
/// It is cheap to clone and is passed explicitly to every API call site.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, MgeError> {
        if config.base_url.trim().is_empty() {
            return Err(config_error("api.base_url must not be empty"));
        }
        let client = create_client(config.timeout_secs)?;
        Ok(Self::with_client(
            client,
            &config.base_url,
            config.token.clone(),
        ))
    }

    /// Builds a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET `path` and normalise the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        key: Option<&str>,
    ) -> Result<T, MgeError> {
        let body = self.send(self.request(Method::GET, path)).await?;
        normalize(body, key)
    }

    /// GET `path` with query parameters and normalise the body into `T`.
    pub async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        key: Option<&str>,
    ) -> Result<T, MgeError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self
            .send(self.request(Method::GET, path).query(query))
            .await?;
        normalize(body, key)
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B, key: Option<&str>) -> Result<T, MgeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(self.request(Method::POST, path).json(body)).await?;
        normalize(body, key)
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B, key: Option<&str>) -> Result<T, MgeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(self.request(Method::PUT, path).json(body)).await?;
        normalize(body, key)
    }

    pub async fn patch_json<T, B>(&self, path: &str, body: &B, key: Option<&str>) -> Result<T, MgeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(self.request(Method::PATCH, path).json(body)).await?;
        normalize(body, key)
    }

    /// DELETE `path`. Any 2xx response without a failure envelope counts as success.
    pub async fn delete(&self, path: &str) -> Result<(), MgeError> {
        let body = self.send(self.request(Method::DELETE, path)).await?;
        crate::envelope::ResponseEnvelope::from_value(body).into_result()?;
        Ok(())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, MgeError> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Backend returned {} for {}", status, url);
            return Err(error_from_status(status, &text));
        }

        debug!("Backend returned {} for {} ({} bytes)", status, url, text.len());
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(MgeError::from)
    }
}

/// Maps a non-2xx backend response onto an `MgeError`.
///
/// Laravel bodies look like `{"message": "...", "errors": {"field": ["..."]}}`;
/// the field errors are flattened into the message.
pub fn error_from_status(status: StatusCode, body: &str) -> MgeError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
    let field_errors = parsed
        .as_ref()
        .and_then(|v| v.get("errors"))
        .and_then(Value::as_object)
        .map(|errors| {
            errors
                .iter()
                .map(|(field, messages)| {
                    let joined = match messages {
                        Value::Array(items) => items
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    format!("{}: {}", field, joined)
                })
                .collect::<Vec<_>>()
                .join("; ")
        })
        .filter(|s| !s.is_empty());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MgeError::AuthError(message),
        StatusCode::NOT_FOUND => MgeError::NotFoundError(message),
        StatusCode::CONFLICT => MgeError::ConflictError(message),
        StatusCode::UNPROCESSABLE_ENTITY => MgeError::ValidationError(match field_errors {
            Some(fields) => format!("{} ({})", message, fields),
            None => message,
        }),
        StatusCode::TOO_MANY_REQUESTS => MgeError::RateLimitError(message),
        _ => external_service_error("backend", format!("{} {}", status.as_u16(), message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_ignores_duplicate_slashes() {
        let client = ApiClient::with_client(Client::new(), "http://localhost:8000/api/", None);
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/units"), "http://localhost:8000/api/units");
        assert_eq!(client.url("units"), "http://localhost:8000/api/units");
    }

    #[test]
    fn test_empty_base_url_is_config_error() {
        let config = ApiConfig {
            base_url: "  ".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        };
        assert!(matches!(ApiClient::new(&config), Err(MgeError::ConfigError(_))));
    }

    #[test]
    fn test_laravel_validation_errors_are_flattened() {
        let body = r#"{"message":"The given data was invalid.","errors":{"phone":["The phone field is required."]}}"#;
        match error_from_status(StatusCode::UNPROCESSABLE_ENTITY, body) {
            MgeError::ValidationError(msg) => {
                assert_eq!(
                    msg,
                    "The given data was invalid. (phone: The phone field is required.)"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_from_status(StatusCode::UNAUTHORIZED, ""),
            MgeError::AuthError(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::NOT_FOUND, r#"{"message":"No unit"}"#),
            MgeError::NotFoundError(ref m) if m == "No unit"
        ));
        assert!(matches!(
            error_from_status(StatusCode::CONFLICT, ""),
            MgeError::ConflictError(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>"),
            MgeError::ExternalServiceError { .. }
        ));
    }
}
