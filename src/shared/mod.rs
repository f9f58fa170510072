//! Shared components - errors, configuration and formatting helpers

pub mod errors;
pub mod utils;
pub mod config;
