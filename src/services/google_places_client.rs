// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Paginated nearby search and per-place detail lookups

use crate::errors::PlacesError;
use crate::models::{
    Coordinates, NearbySearchResponse, PlaceDetail, PlaceDetailsResponse, PlaceReference,
};
use crate::services::{HttpTransport, TransportResponse};
use std::sync::Arc;
use std::time::Duration;

/// Fields requested from Place Details
const DETAIL_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,rating,user_ratings_total,website";

/// Everything a nearby search collected before it stopped
/// DOCUMENTATION: `error` is set when the loop ended on a failure;
/// `places` still holds every page fetched before it
#[derive(Debug, Default)]
pub struct SearchResults {
    pub places: Vec<PlaceReference>,
    /// Number of nearby search requests issued
    pub requests: u32,
    pub error: Option<PlacesError>,
}

/// Google Places API client
/// DOCUMENTATION: Holds the API key and the token activation delay
pub struct GooglePlacesClient {
    transport: Arc<dyn HttpTransport>,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
    /// Wait before a next_page_token may be used
    page_token_delay: Duration,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_key: String,
        base_url: String,
        page_token_delay: Duration,
    ) -> Self {
        Self {
            transport,
            api_key,
            base_url,
            page_token_delay,
        }
    }

    /// Search near a point and follow pagination until exhausted
    /// DOCUMENTATION: Pages are appended in order. No de-duplication and no page cap.
    ///
    /// # Arguments
    /// * `location` - Center point
    /// * `keyword` - Keyword filter
    /// * `radius` - Search radius in meters
    ///
    /// # Returns
    /// SearchResults; never fails outright, the first failing page stops the loop
    pub async fn search_places(
        &self,
        location: Coordinates,
        keyword: &str,
        radius: u32,
    ) -> SearchResults {
        let url = format!("{}/nearbysearch/json", self.base_url);
        let mut results = SearchResults::default();
        let mut page_token: Option<String> = None;

        log::debug!(
            "Google Places nearby search: location={}, radius={}, keyword={}",
            location.to_query_value(),
            radius,
            keyword
        );

        loop {
            let mut params = vec![
                ("key", self.api_key.clone()),
                ("location", location.to_query_value()),
                ("radius", radius.to_string()),
                ("keyword", keyword.to_string()),
            ];
            if let Some(token) = page_token.take() {
                params.push(("pagetoken", token));
            }

            results.requests += 1;
            let page = match self.fetch_search_page(&url, &params).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!(
                        "Nearby search stopped on page {}: {}",
                        results.requests,
                        e
                    );
                    results.error = Some(e);
                    break;
                }
            };

            log::info!(
                "Nearby search page {} returned {} results",
                results.requests,
                page.results.len()
            );
            results
                .places
                .extend(page.results.into_iter().map(PlaceReference::from));

            match page.next_page_token {
                Some(token) => {
                    // Google rejects a fresh token until it has propagated
                    tokio::time::sleep(self.page_token_delay).await;
                    page_token = Some(token);
                }
                None => break,
            }
        }

        results
    }

    async fn fetch_search_page(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<NearbySearchResponse, PlacesError> {
        let response: TransportResponse =
            self.transport.get(url, params).await?.error_for_status()?;
        let page: NearbySearchResponse = response.json()?;

        match page.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(page),
            other => Err(PlacesError::from_upstream_status(other, page.error_message)),
        }
    }

    /// Get detailed information about a specific place
    /// DOCUMENTATION: Only the six exported fields are requested
    ///
    /// # Arguments
    /// * `place_id` - Google Place ID
    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = format!("{}/details/json", self.base_url);

        let params = [
            ("key", self.api_key.clone()),
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
        ];

        log::debug!("Google Places details lookup: place_id={}", place_id);

        let response = self.transport.get(&url, &params).await?.error_for_status()?;
        let api_response: PlaceDetailsResponse = response.json()?;

        if api_response.status != "OK" {
            let err =
                PlacesError::from_upstream_status(&api_response.status, api_response.error_message);
            log::error!("Details lookup failed for {}: {}", place_id, err);
            return Err(err);
        }

        Ok(api_response.result.unwrap_or_default().into())
    }
}
