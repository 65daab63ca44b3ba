// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod google;
pub mod place;

pub use google::*;
pub use place::*;
