// src/models/google.rs
// DOCUMENTATION: Response schemas of the Google Geocoding and Places APIs
// PURPOSE: Explicit optional-field types instead of poking into untyped JSON

use super::{Coordinates, PlaceDetail, PlaceReference};
use serde::Deserialize;

/// Response from the Geocoding API
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GoogleGeometry,
    pub formatted_address: Option<String>,
}

/// Geographic location from Google
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLocation,
}

/// Coordinates from Google
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleLocation {
    pub lat: f64,
    pub lng: f64,
}

impl From<&GoogleLocation> for Coordinates {
    fn from(location: &GoogleLocation) -> Self {
        Coordinates::new(location.lat, location.lng)
    }
}

/// Response from Google Places Nearby Search
/// DOCUMENTATION: One page of results plus an optional continuation token
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    /// Next page token (if more results available)
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

/// Individual nearby search hit
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
}

impl From<NearbyPlace> for PlaceReference {
    fn from(place: NearbyPlace) -> Self {
        PlaceReference {
            name: place.name,
            place_id: place.place_id,
        }
    }
}

/// Response from Google Place Details
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<GooglePlaceDetail>,
    pub error_message: Option<String>,
}

/// Detail fields requested from Place Details
/// DOCUMENTATION: Mirrors the `fields` parameter sent by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GooglePlaceDetail {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub website: Option<String>,
}

impl From<GooglePlaceDetail> for PlaceDetail {
    fn from(detail: GooglePlaceDetail) -> Self {
        PlaceDetail {
            name: detail.name,
            address: detail.formatted_address,
            phone: detail.formatted_phone_number,
            rating: detail.rating,
            review_count: detail.user_ratings_total,
            website: detail.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nearby_response_without_results_or_token() {
        let response: NearbySearchResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();

        assert!(response.results.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn test_detail_mapping_keeps_missing_fields_empty() {
        let response: PlaceDetailsResponse = serde_json::from_value(json!({
            "status": "OK",
            "result": {
                "name": "Old Granite Street Eatery",
                "rating": 4.4,
                "user_ratings_total": 2310
            }
        }))
        .unwrap();

        let detail = PlaceDetail::from(response.result.unwrap());
        assert_eq!(detail.name.as_deref(), Some("Old Granite Street Eatery"));
        assert_eq!(detail.rating, Some(4.4));
        assert_eq!(detail.review_count, Some(2310));
        assert!(detail.address.is_none());
        assert!(detail.phone.is_none());
        assert!(detail.website.is_none());
    }
}
