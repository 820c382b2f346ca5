//! log4rs setup.
//!
//! `log4rs.yml` in the working directory wins. Without it a stderr console
//! appender is used, level from `ASN_LOG_LEVEL` (default `info`).

use crate::error::AsnError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::str::FromStr;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Install the global logger. Call once, first thing in `main`.
pub fn init() -> Result<(), AsnError> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        return log4rs::init_file(LOG_CONFIG_FILE, Default::default()).map_err(|e| {
            AsnError::Config {
                key: LOG_CONFIG_FILE.to_string(),
                message: e.to_string(),
            }
        });
    }

    let level = level_from(std::env::var("ASN_LOG_LEVEL").ok().as_deref())?;
    log4rs::init_config(console_config(level)?).map_err(|e| AsnError::Config {
        key: "logger".to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Parse a level name, `None` means `info`.
pub fn level_from(value: Option<&str>) -> Result<LevelFilter, AsnError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(LevelFilter::Info),
        Some(v) => LevelFilter::from_str(v).map_err(|_| AsnError::Config {
            key: "ASN_LOG_LEVEL".to_string(),
            message: format!("unknown level '{v}'"),
        }),
    }
}

/// Console-only config writing to stderr, keeping stdout for the prompts.
pub fn console_config(level: LevelFilter) -> Result<Config, AsnError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| AsnError::Config {
            key: "logger".to_string(),
            message: e.to_string(),
        })
}
