use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

use crate::utils::logging;

/// Reference zone used when `REFERENCE_TIMEZONE` is not set.
pub const DEFAULT_REFERENCE_TIMEZONE: &str = "Australia/Melbourne";
/// Placeholder used when `DISPLAY_PLACEHOLDER` is not set.
pub const DEFAULT_DISPLAY_PLACEHOLDER: &str = "Date TBD";

/// Deployment-wide conversion settings.
///
/// The reference zone is a single configuration constant for the whole
/// system, never a per-request value.
#[derive(Debug, Clone)]
pub struct Config {
    /// IANA zone all civil input is interpreted in.
    pub reference_timezone: Tz,
    /// Text rendered in place of a missing or invalid instant.
    pub display_placeholder: String,
}

impl Config {
    /// Loads `.env` if present, reads the environment, and logs the result.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;
        logging::log_system_event(
            "Configuration loaded",
            Some(&format!(
                "reference timezone: {}",
                config.reference_timezone.name()
            )),
        );
        Ok(config)
    }

    /// Builds configuration from environment variables alone.
    pub fn from_env() -> Result<Self> {
        let zone_name = env::var("REFERENCE_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_REFERENCE_TIMEZONE.to_string());
        let zone_name = if zone_name.trim().is_empty() {
            DEFAULT_REFERENCE_TIMEZONE.to_string()
        } else {
            zone_name
        };

        let reference_timezone: Tz = zone_name
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid REFERENCE_TIMEZONE: {}", zone_name))?;

        let display_placeholder = env::var("DISPLAY_PLACEHOLDER")
            .unwrap_or_else(|_| DEFAULT_DISPLAY_PLACEHOLDER.to_string());
        let display_placeholder = if display_placeholder.trim().is_empty() {
            DEFAULT_DISPLAY_PLACEHOLDER.to_string()
        } else {
            display_placeholder
        };

        Ok(Config {
            reference_timezone,
            display_placeholder,
        })
    }
}
