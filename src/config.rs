//! Runtime settings.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! `dotenv` in `main`). Anything unset falls back to the defaults below.

use crate::error::AsnError;
use crate::generator::GroupMode;
use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

/// Lowest ASN accepted by the validator.
pub const MIN_ASN: u32 = 1;
/// Highest ASN accepted by the validator (top of the 2-byte public range).
pub const MAX_ASN: u32 = 64495;

pub const DEFAULT_DEVICE_GROUP: &str = "External";
pub const DEFAULT_OBJECT_PREFIX: &str = "2025_";
pub const DEFAULT_TAG: &str = "ASN_Blocks";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_API_BASE: &str = "https://api.bgpview.io";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the fetcher, the store and the generator.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Panorama device-group every object is created in.
    pub device_group: String,
    /// Prepended to every object and group name.
    pub object_prefix: String,
    /// Tag applied to every object.
    pub tag: String,
    /// Directory the prefix and command files are written to.
    pub output_dir: PathBuf,
    /// Base URL of the BGPView API, without trailing slash.
    pub api_base: String,
    pub http_timeout: Duration,
    pub group_mode: GroupMode,
    /// Time zone used for the file name timestamp.
    pub timezone: Tz,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            device_group: DEFAULT_DEVICE_GROUP.to_string(),
            object_prefix: DEFAULT_OBJECT_PREFIX.to_string(),
            tag: DEFAULT_TAG.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            group_mode: GroupMode::RepeatPerItem,
            timezone: Tz::UTC,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, AsnError> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, AsnError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("ASN_DEVICE_GROUP") {
            settings.device_group = v.trim().to_string();
        }
        if let Some(v) = get("ASN_OBJECT_PREFIX") {
            settings.object_prefix = v.trim().to_string();
        }
        if let Some(v) = get("ASN_TAG") {
            settings.tag = v.trim().to_string();
        }
        if let Some(v) = get("ASN_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(v.trim());
        }
        if let Some(v) = get("ASN_API_BASE") {
            settings.api_base = v.trim().trim_end_matches('/').to_string();
        }
        if let Some(v) = get("ASN_HTTP_TIMEOUT_SECS") {
            let secs: u64 = v.trim().parse().map_err(|e| AsnError::Config {
                key: "ASN_HTTP_TIMEOUT_SECS".to_string(),
                message: format!("'{v}' is not a number of seconds: {e}"),
            })?;
            settings.http_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = get("ASN_GROUP_MODE") {
            settings.group_mode = v.parse().map_err(|message| AsnError::Config {
                key: "ASN_GROUP_MODE".to_string(),
                message,
            })?;
        }
        if let Some(v) = get("ASN_TIMEZONE") {
            settings.timezone = v.trim().parse::<Tz>().map_err(|e| AsnError::Config {
                key: "ASN_TIMEZONE".to_string(),
                message: format!("'{v}': {e}"),
            })?;
        }

        log::debug!("settings={:?}", settings);
        Ok(settings)
    }
}
