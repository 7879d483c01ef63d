//! Stateless HTTP request builder and response parser for the USA Gymnastics
//! API.
//!
//! # Design
//! `UsaGymClient` holds only its configuration and carries no mutable state
//! between calls. `build` turns an `Endpoint` into an `HttpRequest` (URL,
//! Basic auth, timeout); `parse` turns the matching `HttpResponse` into the
//! endpoint's output. Status errors are raised before the body is read as
//! records, so a 4xx/5xx never produces a parse error. The caller, or the
//! `UsaGym` facade, executes the round-trip in between.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Synchronous, stateless client for the USA Gymnastics API.
#[derive(Debug, Clone)]
pub struct UsaGymClient {
    config: ClientConfig,
    base_url: Url,
}

impl UsaGymClient {
    /// Validate `config` and keep it for every request this client builds.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL: {e}")))?;
        Ok(Self { config, base_url })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Copy of this client whose requests use `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            config: self.config.clone().with_timeout(timeout),
            base_url: self.base_url.clone(),
        }
    }

    pub fn build<E: Endpoint>(&self, endpoint: &E) -> Result<HttpRequest, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::Config(format!("invalid base URL: {}", self.base_url)))?;
            segments.pop_if_empty();
            for segment in endpoint.path_segments() {
                segments.push(&segment);
            }
        }

        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("authorization".to_string(), self.config.auth_header()),
            ],
            timeout: self.config.timeout,
        })
    }

    pub fn parse<E: Endpoint>(&self, endpoint: &E, response: HttpResponse) -> Result<E::Output, ApiError> {
        check_status(&response)?;
        let body = decode_body(&response.body)?;
        endpoint.parse_body(&body)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_response(response))
}

/// Empty bodies decode to `null`.
fn decode_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
