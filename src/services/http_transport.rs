// src/services/http_transport.rs
// DOCUMENTATION: HTTP seam used by the Google clients
// PURPOSE: Send a GET with query params, hand back status + raw body

use crate::errors::PlacesError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PlacesError> {
        serde_json::from_str(&self.body).map_err(|e| {
            log::error!("Failed to parse Google API response: {}", e);
            PlacesError::ParseError(e.to_string())
        })
    }

    /// Turn a non-success response into an error, logging status and body
    pub fn error_for_status(self) -> Result<Self, PlacesError> {
        if self.is_success() {
            return Ok(self);
        }
        log::error!("Google API error {}: {}", self.status, self.body);
        Err(PlacesError::ExternalApiError {
            status: self.status,
            body: self.body,
        })
    }
}

/// Minimal GET-only HTTP transport
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<TransportResponse, PlacesError>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlacesError::ConfigurationError(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<TransportResponse, PlacesError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google API request failed: {}", e);
                PlacesError::RequestFailed(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read Google API response body: {}", e);
            PlacesError::RequestFailed(e.to_string())
        })?;

        Ok(TransportResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_error_for_status_keeps_body() {
        let response = TransportResponse {
            status: 403,
            body: "forbidden".to_string(),
        };

        match response.error_for_status() {
            Err(PlacesError::ExternalApiError { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "forbidden");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_json_parse_error() {
        let response = TransportResponse {
            status: 200,
            body: "<html>".to_string(),
        };
        let parsed: Result<Value, _> = response.json();
        assert!(matches!(parsed, Err(PlacesError::ParseError(_))));
    }
}
