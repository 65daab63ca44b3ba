// src/services/pipeline.rs
// DOCUMENTATION: Resolve -> search -> details -> export orchestration
// PURPOSE: Drive one interactive run and collect its statistics

use crate::config::Config;
use crate::errors::PlacesError;
use crate::models::{Coordinates, PlaceDetail};
use crate::services::{
    output_filename, GeocodingClient, GooglePlacesClient, HttpTransport, XlsxExporter,
};
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RunOutcome {
    /// Geocoding failed or found nothing; search was never attempted
    CoordinatesNotFound,
    /// No detail record survived; no file was written
    NothingToSave,
    /// Spreadsheet written
    Saved { path: PathBuf, rows: usize },
    /// Records were collected but the file could not be written
    ExportFailed { error: String },
}

/// Run statistics
/// DOCUMENTATION: Tracks results of one run, printed as a summary at the end
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub city: String,
    pub keyword: String,
    pub coordinates: Option<Coordinates>,
    /// Total number of API requests made
    pub api_requests: u32,
    /// References returned by nearby search (all pages)
    pub places_found: u32,
    /// Detail lookups that succeeded
    pub details_fetched: u32,
    /// Detail lookups that failed and were dropped
    pub details_failed: u32,
    /// Failures that carried a non-success HTTP status
    pub http_errors: u32,
    /// Error messages encountered
    pub errors: Vec<String>,
    pub outcome: RunOutcome,
    pub duration_seconds: u64,
    pub started_at: String,
    pub completed_at: Option<String>,
}

impl RunStats {
    pub fn new(city: &str, keyword: &str) -> Self {
        Self {
            city: city.to_string(),
            keyword: keyword.to_string(),
            coordinates: None,
            api_requests: 0,
            places_found: 0,
            details_fetched: 0,
            details_failed: 0,
            http_errors: 0,
            errors: Vec::new(),
            outcome: RunOutcome::CoordinatesNotFound,
            duration_seconds: 0,
            started_at: Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }

    /// Record a collaborator failure
    pub fn record_error(&mut self, error: &PlacesError, context: String) {
        if error.http_status().is_some() {
            self.http_errors += 1;
        }
        self.errors.push(format!("{}: {}", context, error));
    }

    /// Mark run as completed
    pub fn complete(&mut self, outcome: RunOutcome, duration: u64) {
        self.outcome = outcome;
        self.duration_seconds = duration;
        self.completed_at = Some(Utc::now().to_rfc3339());
    }
}

/// Wires the geocoder, places client and exporter together
pub struct PlacesPipeline {
    geocoder: GeocodingClient,
    places: GooglePlacesClient,
    exporter: XlsxExporter,
    search_radius_m: u32,
}

impl PlacesPipeline {
    pub fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            geocoder: GeocodingClient::new(
                transport.clone(),
                config.google_places_api_key.clone(),
                config.geocoding_base_url.clone(),
            ),
            places: GooglePlacesClient::new(
                transport,
                config.google_places_api_key.clone(),
                config.places_base_url.clone(),
                config.page_token_delay,
            ),
            exporter: XlsxExporter::new(config.output_dir.clone()),
            search_radius_m: config.search_radius_m,
        }
    }

    /// Run the whole flow for one keyword/city pair
    /// DOCUMENTATION: Never fails; every collaborator error is logged,
    /// recorded in the stats and turned into absent or partial data
    ///
    /// Process:
    /// 1. Resolve city coordinates (abort if absent)
    /// 2. Nearby search with pagination (continue even if empty)
    /// 3. Fetch details per reference, dropping failures
    /// 4. Export if at least one record survived
    pub async fn run(&self, keyword: &str, city: &str) -> RunStats {
        let start_time = Instant::now();
        let mut stats = RunStats::new(city, keyword);

        log::info!("Starting run: keyword='{}', city='{}'", keyword, city);

        stats.api_requests += 1;
        let coordinates = match self.geocoder.resolve_coordinates(city).await {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => {
                log::warn!("City not found: {}", city);
                return finish(stats, RunOutcome::CoordinatesNotFound, start_time);
            }
            Err(e) => {
                stats.record_error(&e, format!("Geocoding {}", city));
                return finish(stats, RunOutcome::CoordinatesNotFound, start_time);
            }
        };
        stats.coordinates = Some(coordinates);
        log::info!("Coordinates of {}: {}", city, coordinates);

        let search = self
            .places
            .search_places(coordinates, keyword, self.search_radius_m)
            .await;
        stats.api_requests += search.requests;
        stats.places_found = search.places.len() as u32;
        if let Some(e) = &search.error {
            stats.record_error(e, "Nearby search".to_string());
        }
        log::info!(
            "Found {} places for '{}' in {}",
            search.places.len(),
            keyword,
            city
        );

        let mut details: Vec<PlaceDetail> = Vec::with_capacity(search.places.len());
        for (idx, place) in search.places.iter().enumerate() {
            log::debug!(
                "Fetching details {}/{}: {}",
                idx + 1,
                search.places.len(),
                place.name
            );

            stats.api_requests += 1;
            match self.places.get_place_details(&place.place_id).await {
                Ok(detail) => {
                    stats.details_fetched += 1;
                    details.push(detail);
                }
                Err(e) => {
                    stats.details_failed += 1;
                    log::warn!("Could not fetch details for {}: {}", place.name, e);
                    stats.record_error(&e, format!("Details for {}", place.name));
                }
            }
        }

        if details.is_empty() {
            log::warn!("No detailed place data to save");
            return finish(stats, RunOutcome::NothingToSave, start_time);
        }

        let filename = output_filename(city, keyword);
        let outcome = match self.exporter.export(&details, &filename) {
            Ok(path) => RunOutcome::Saved {
                path,
                rows: details.len(),
            },
            Err(e) => {
                stats.record_error(&e, "Export".to_string());
                RunOutcome::ExportFailed {
                    error: e.to_string(),
                }
            }
        };

        finish(stats, outcome, start_time)
    }
}

fn finish(mut stats: RunStats, outcome: RunOutcome, start_time: Instant) -> RunStats {
    stats.complete(outcome, start_time.elapsed().as_secs());
    log::info!(
        "Run finished in {}s: {} requests, {} places, {} details, {} failed",
        stats.duration_seconds,
        stats.api_requests,
        stats.places_found,
        stats.details_fetched,
        stats.details_failed
    );
    match serde_json::to_string(&stats) {
        Ok(json) => log::debug!("Run stats: {}", json),
        Err(e) => log::debug!("Could not serialize run stats: {}", e),
    }
    stats
}
