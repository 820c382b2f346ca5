//! BGPView HTTP client.
//!
//! Two read-only GETs per ASN: the prefix listing and the ASN details.

use super::models::{parse_asn_response, parse_prefixes_response, AsnPrefixes};
use crate::config::Settings;
use crate::error::AsnError;
use colored::Colorize;
use std::time::Duration;

/// Thin wrapper around a [`reqwest::Client`] bound to one API base URL.
pub struct BgpViewClient {
    client: reqwest::Client,
    api_base: String,
}

impl BgpViewClient {
    /// Build a client for the base URL and timeout in `settings`.
    pub fn new(settings: &Settings) -> Result<BgpViewClient, AsnError> {
        BgpViewClient::with_base(&settings.api_base, settings.http_timeout)
    }

    pub fn with_base(api_base: &str, timeout: Duration) -> Result<BgpViewClient, AsnError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AsnError::Config {
                key: "http client".to_string(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(BgpViewClient {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn prefixes_url(&self, asn: u32) -> String {
        format!("{}/asn/{asn}/prefixes", self.api_base)
    }

    pub fn asn_url(&self, asn: u32) -> String {
        format!("{}/asn/{asn}", self.api_base)
    }

    /// Fetch prefixes and registered name for `asn`.
    ///
    /// # Returns
    /// * `Ok(AsnPrefixes)` - Both lists plus the resolved name and slug
    /// * `Err(AsnError::Fetch)` - Transport failure, bad HTTP status or empty body
    /// * `Err(AsnError::NotFound)` - Source status was not "ok"
    pub async fn fetch(&self, asn: u32) -> Result<AsnPrefixes, AsnError> {
        let url = self.prefixes_url(asn);
        let body = self.get_text(&url).await?;
        let prefixes = parse_prefixes_response(asn, &url, &body)?;
        log::info!(
            "AS{asn}: got {} ipv4 and {} ipv6 prefixes",
            prefixes.ipv4.len(),
            prefixes.ipv6.len()
        );

        let url = self.asn_url(asn);
        let body = self.get_text(&url).await?;
        let raw_name = parse_asn_response(asn, &url, &body)?;

        let result = AsnPrefixes::new(asn, prefixes, raw_name);
        log::info!("AS{asn}: name='{}' slug='{}'", result.name, result.slug);
        Ok(result)
    }

    async fn get_text(&self, url: &str) -> Result<String, AsnError> {
        log::debug!("GET {url}", url = url.on_blue());

        let response = self.client.get(url).send().await.map_err(|e| {
            log::warn!("{failed} GET {url}: {e}", failed = "failed".on_red());
            AsnError::Fetch {
                url: url.to_string(),
                message: format!("request failed: {e}"),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AsnError::Fetch {
                url: url.to_string(),
                message: format!("HTTP status {status}"),
            });
        }

        let body = response.text().await.map_err(|e| AsnError::Fetch {
            url: url.to_string(),
            message: format!("reading body failed: {e}"),
        })?;
        log::debug!("GET {url} => {} bytes", body.len());
        Ok(body)
    }
}
