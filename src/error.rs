//! Error kinds reported by the prefix to command pipeline.
//!
//! Every variant is terminal: the binary logs the message and exits 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AsnError {
    /// ASN text was not all digits or fell outside the accepted range.
    #[error("Invalid ASN '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Transport failure, non-success HTTP status or empty body.
    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// The data source answered but did not report status "ok".
    #[error("AS{asn} not found (status='{status}')")]
    NotFound { asn: u32, status: String },

    /// The ASN resolved but advertises no IPv4 prefixes.
    #[error("No IPv4 prefixes found for AS{asn}")]
    NoPrefixes { asn: u32 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value could not be parsed.
    #[error("Config error in {key}: {message}")]
    Config { key: String, message: String },
}

impl AsnError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AsnError::Io {
            path: path.into(),
            source,
        }
    }
}
