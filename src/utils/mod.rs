//! Utility module
//!
//! This module provides:
//! - Configuration management
//! - Logging setup
//! - Vector math helpers

mod config;
mod logging;
pub mod math;

pub use config::{BeatsConfig, Config, GraphConfig, InputConfig, LoggingConfig};
pub use logging::setup_logging;
