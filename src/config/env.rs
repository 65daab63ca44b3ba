// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::PlacesError;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use validator::Validate;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup and hand it to each client
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Google API key, shared by Geocoding and Places
    pub google_places_api_key: String,

    /// Geocoding API base URL (without the trailing `/json`)
    #[validate(url)]
    pub geocoding_base_url: String,

    /// Places API base URL (nearbysearch and details live under it)
    #[validate(url)]
    pub places_base_url: String,

    /// Nearby search radius in meters (Google caps it at 50000)
    #[validate(range(min = 1, max = 50000))]
    pub search_radius_m: u32,

    /// Pause before a next_page_token becomes usable
    pub page_token_delay: Duration,

    /// Per-request timeout in seconds
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,

    /// Directory the spreadsheet is written to
    pub output_dir: PathBuf,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    /// DOCUMENTATION: Unparseable numbers fall back to their defaults
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Config {
            google_places_api_key: var_or("GOOGLE_PLACES_API_KEY", ""),

            geocoding_base_url: var_or(
                "GEOCODING_API_URL",
                "https://maps.googleapis.com/maps/api/geocode",
            ),

            places_base_url: var_or("PLACES_API_URL", "https://maps.googleapis.com/maps/api/place"),

            search_radius_m: var_or("SEARCH_RADIUS_M", "10000").parse().unwrap_or(10000),

            page_token_delay: Duration::from_millis(
                var_or("PAGE_TOKEN_DELAY_MS", "2000").parse().unwrap_or(2000),
            ),

            request_timeout_secs: var_or("REQUEST_TIMEOUT_SECS", "30").parse().unwrap_or(30),

            output_dir: PathBuf::from(var_or("OUTPUT_DIR", ".")),

            log_level: var_or("LOG_LEVEL", "info"),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures a run can start; a missing key is fatal for the run
    pub fn check(&self) -> Result<(), PlacesError> {
        self.validate()
            .map_err(|e| PlacesError::ConfigurationError(e.to_string()))?;

        if self.google_places_api_key.trim().is_empty() {
            return Err(PlacesError::ConfigurationError(
                "GOOGLE_PLACES_API_KEY is required".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.search_radius_m, 10000);
        assert_eq!(config.page_token_delay, Duration::from_secs(2));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.places_base_url,
            "https://maps.googleapis.com/maps/api/place"
        );
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let config = config_with(&[
            ("GOOGLE_PLACES_API_KEY", "abc"),
            ("SEARCH_RADIUS_M", "2500"),
            ("PAGE_TOKEN_DELAY_MS", "not-a-number"),
            ("OUTPUT_DIR", "/tmp/exports"),
        ]);

        assert_eq!(config.google_places_api_key, "abc");
        assert_eq!(config.search_radius_m, 2500);
        assert_eq!(config.page_token_delay, Duration::from_millis(2000));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/exports"));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let config = config_with(&[]);
        assert!(matches!(
            config.check(),
            Err(PlacesError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_radius_out_of_range_is_rejected() {
        let config = config_with(&[("GOOGLE_PLACES_API_KEY", "abc"), ("SEARCH_RADIUS_M", "60000")]);
        assert!(config.check().is_err());
    }
}
