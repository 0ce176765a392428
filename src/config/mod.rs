//! Application configuration module
//!
//! Handles the deployed-stack resource identifiers and their environment
//! variable overrides.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{get, RuntimeConfig};
