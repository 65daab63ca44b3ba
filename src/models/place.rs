// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Coordinates, search references and detail records passed between stages

use serde::Serialize;
use std::fmt;

/// Column order of the exported spreadsheet
pub const EXPORT_COLUMNS: [&str; 6] = [
    "name",
    "address",
    "phone",
    "rating",
    "review_count",
    "website",
];

/// Latitude/longitude pair resolved from a city name
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Value for the `location` query parameter ("lat,lng")
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A nearby search hit
/// DOCUMENTATION: Only the display name and Google's opaque place_id are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceReference {
    pub name: String,
    pub place_id: String,
}

/// Detailed attributes of one place
/// DOCUMENTATION: Every field is independently optional; a field Google omits stays None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub website: Option<String>,
}

/// One spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    fn text(value: &Option<String>) -> Self {
        value
            .as_ref()
            .map(|s| CellValue::Text(s.clone()))
            .unwrap_or(CellValue::Empty)
    }
}

impl PlaceDetail {
    /// Cells in EXPORT_COLUMNS order
    pub fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::text(&self.name),
            CellValue::text(&self.address),
            CellValue::text(&self.phone),
            self.rating.map(CellValue::Number).unwrap_or(CellValue::Empty),
            self.review_count
                .map(|count| CellValue::Number(count as f64))
                .unwrap_or(CellValue::Empty),
            CellValue::text(&self.website),
        ]
    }
}
