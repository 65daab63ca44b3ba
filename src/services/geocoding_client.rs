// src/services/geocoding_client.rs
// DOCUMENTATION: Google Geocoding API client
// PURPOSE: Resolve a free-text place name to coordinates

use crate::errors::PlacesError;
use crate::models::{Coordinates, GeocodeResponse};
use crate::services::HttpTransport;
use std::sync::Arc;

/// Google Geocoding API client
pub struct GeocodingClient {
    transport: Arc<dyn HttpTransport>,
    api_key: String,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: String, base_url: String) -> Self {
        Self {
            transport,
            api_key,
            base_url,
        }
    }

    /// Look up coordinates for a location name
    /// DOCUMENTATION: First result wins; no disambiguation between candidates
    ///
    /// # Returns
    /// * `Ok(Some(coords))` - at least one match
    /// * `Ok(None)` - the lookup succeeded but found nothing
    /// * `Err(_)` - transport, parse or upstream status failure
    pub async fn resolve_coordinates(
        &self,
        location_name: &str,
    ) -> Result<Option<Coordinates>, PlacesError> {
        let url = format!("{}/json", self.base_url);
        let params = [
            ("address", location_name.to_string()),
            ("key", self.api_key.clone()),
        ];

        log::debug!("Geocoding lookup: address={}", location_name);

        let response = self.transport.get(&url, &params).await?.error_for_status()?;
        let api_response: GeocodeResponse = response.json()?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => {
                let err = PlacesError::from_upstream_status(other, api_response.error_message);
                log::error!("Geocoding failed for {}: {}", location_name, err);
                return Err(err);
            }
        }

        match api_response.results.first() {
            Some(result) => {
                log::debug!(
                    "Geocoded {} as {}",
                    location_name,
                    result.formatted_address.as_deref().unwrap_or("<no address>")
                );
                Ok(Some(Coordinates::from(&result.geometry.location)))
            }
            None => {
                log::warn!("Location not found: {}", location_name);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::ScriptedTransport;
    use serde_json::json;

    fn client(transport: Arc<ScriptedTransport>) -> GeocodingClient {
        GeocodingClient::new(
            transport,
            "test_key".to_string(),
            "http://geo.test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_first_result_wins() {
        let transport = Arc::new(ScriptedTransport::new().reply_json(json!({
            "status": "OK",
            "results": [
                { "geometry": { "location": { "lat": 39.53, "lng": -119.81 } } },
                { "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
            ]
        })));

        let coords = client(transport.clone())
            .resolve_coordinates("Reno")
            .await
            .unwrap();

        assert_eq!(coords, Some(Coordinates::new(39.53, -119.81)));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://geo.test/json");
        assert_eq!(requests[0].param("address"), Some("Reno"));
        assert_eq!(requests[0].param("key"), Some("test_key"));
    }

    #[tokio::test]
    async fn test_empty_results_is_not_found() {
        let transport = Arc::new(
            ScriptedTransport::new().reply_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        );

        let coords = client(transport).resolve_coordinates("Nowhere").await;
        assert!(matches!(coords, Ok(None)));
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let transport = Arc::new(ScriptedTransport::new().reply(500, "boom"));

        let err = client(transport)
            .resolve_coordinates("Reno")
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), Some(500));
    }

    #[tokio::test]
    async fn test_request_denied_is_an_error() {
        let transport = Arc::new(ScriptedTransport::new().reply_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })));

        let result = client(transport).resolve_coordinates("Reno").await;
        assert!(matches!(result, Err(PlacesError::UpstreamStatus { .. })));
    }
}
