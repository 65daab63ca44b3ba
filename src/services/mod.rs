// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod exporter;
pub mod geocoding_client;
pub mod google_places_client;
pub mod http_transport;
pub mod pipeline;

pub use exporter::*;
pub use geocoding_client::*;
pub use google_places_client::*;
pub use http_transport::*;
pub use pipeline::*;
