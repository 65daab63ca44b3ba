// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Operator-facing input and output

pub mod console;

pub use console::*;
