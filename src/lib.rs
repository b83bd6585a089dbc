//! # Shift Time
//!
//! Timezone-safe date/time conversion for a workforce scheduling backend.
//!
//! ## Features
//! - Parse shift and timesheet wall-clock strings in a fixed reference timezone
//! - Convert civil times to UTC instants for storage and back for display
//! - Deterministic handling of daylight-saving gaps and overlaps
//! - Display formatting with a graceful placeholder for missing values
//! - Request field validation for shift and timesheet payloads

/// Configuration management and environment variables
pub mod config;
/// Conversion services between wall-clock time and UTC
pub mod services;
/// Utility functions for datetime, validation, and logging
pub mod utils;

pub use config::Config;
pub use services::timezone::TimeConversionService;
pub use utils::datetime::{CivilDateTime, DisplayPrecision};
pub use utils::error::{ConversionError, ConversionResult};
