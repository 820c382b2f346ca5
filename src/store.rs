//! Prefix list files.
//!
//! Each run writes `<slug>_as<ASN>_ipv4_<timestamp>.txt` and the matching
//! `ipv6` file, one CIDR per line, into the output directory.

use crate::bgpview::AsnPrefixes;
use crate::error::AsnError;
use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

/// Minute resolution, sorts lexically.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Address family of a prefix file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Ipv4 => "ipv4",
            Family::Ipv6 => "ipv6",
        }
    }
}

/// Files left on disk after [`store_prefixes`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPrefixes {
    pub ipv4_path: PathBuf,
    /// `None` when the ASN has no IPv6 prefixes.
    pub ipv6_path: Option<PathBuf>,
}

/// Format `now` for use in file names.
pub fn format_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// `<dir>/<slug>_as<asn>_<family>_<timestamp>.txt`
pub fn prefix_file_path(
    dir: &Path,
    slug: &str,
    asn: u32,
    family: Family,
    timestamp: &str,
) -> PathBuf {
    dir.join(format!("{slug}_as{asn}_{}_{timestamp}.txt", family.as_str()))
}

/// Command file next to the IPv4 list, `.txt` replaced by `.commands.txt`.
pub fn commands_file_path(ipv4_path: &Path) -> PathBuf {
    let name = ipv4_path.to_string_lossy();
    match name.strip_suffix(".txt") {
        Some(stem) => PathBuf::from(format!("{stem}.commands.txt")),
        None => PathBuf::from(format!("{name}.commands.txt")),
    }
}

/// Write both prefix lists.
///
/// # Returns
/// * `Ok(StoredPrefixes)` - IPv4 path, plus IPv6 path if that list was non-empty
/// * `Err(AsnError::NoPrefixes)` - No IPv4 prefixes; nothing is left on disk
/// * `Err(AsnError::Io)` - A file could not be written or removed
pub fn store_prefixes(
    dir: &Path,
    prefixes: &AsnPrefixes,
    timestamp: &str,
) -> Result<StoredPrefixes, AsnError> {
    fs::create_dir_all(dir).map_err(|e| AsnError::io(dir, e))?;

    let ipv4_path = prefix_file_path(dir, &prefixes.slug, prefixes.asn, Family::Ipv4, timestamp);
    let ipv6_path = prefix_file_path(dir, &prefixes.slug, prefixes.asn, Family::Ipv6, timestamp);
    let ipv4_written = write_prefix_file(&ipv4_path, &prefixes.ipv4)?;
    let ipv6_written = match write_prefix_file(&ipv6_path, &prefixes.ipv6) {
        Ok(written) => written,
        Err(e) => {
            // Leave nothing behind from a half-written run
            if let Err(cleanup) = remove_file(&ipv4_path) {
                log::warn!("cleanup failed: {cleanup}");
            }
            return Err(e);
        }
    };

    let ipv6_path = if ipv6_written == 0 {
        log::info!(
            "AS{}: no ipv6 prefixes, removing {}",
            prefixes.asn,
            ipv6_path.display()
        );
        remove_file(&ipv6_path)?;
        None
    } else {
        Some(ipv6_path)
    };

    if ipv4_written == 0 {
        log::warn!(
            "AS{}: no ipv4 prefixes, removing {}",
            prefixes.asn,
            ipv4_path.display()
        );
        remove_file(&ipv4_path)?;
        if let Some(path) = &ipv6_path {
            remove_file(path)?;
        }
        return Err(AsnError::NoPrefixes { asn: prefixes.asn });
    }

    log::info!(
        "AS{}: wrote {ipv4_written} ipv4 prefixes to {}",
        prefixes.asn,
        ipv4_path.display()
    );
    Ok(StoredPrefixes {
        ipv4_path,
        ipv6_path,
    })
}

/// Write one CIDR per line, returns the number of non-blank lines written.
fn write_prefix_file(path: &Path, prefixes: &[String]) -> Result<usize, AsnError> {
    let mut content = String::new();
    for prefix in prefixes {
        content.push_str(prefix);
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| AsnError::io(path, e))?;
    Ok(prefixes.iter().filter(|p| !p.trim().is_empty()).count())
}

fn remove_file(path: &Path) -> Result<(), AsnError> {
    fs::remove_file(path).map_err(|e| AsnError::io(path, e))
}

/// Read a prefix file back, skipping blank lines, in file order.
pub fn read_prefix_file(path: &Path) -> Result<Vec<String>, AsnError> {
    let content = fs::read_to_string(path).map_err(|e| AsnError::io(path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
