//! BGPView response models.

use crate::error::AsnError;
use serde::{Deserialize, Serialize};

/// Name used when the source has no registered name for an ASN.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Envelope shared by every BGPView endpoint.
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    status: String,
    status_message: Option<String>,
    data: Option<T>,
}

#[derive(Deserialize, Debug)]
struct PrefixData {
    #[serde(default)]
    ipv4_prefixes: Vec<PrefixEntry>,
    #[serde(default)]
    ipv6_prefixes: Vec<PrefixEntry>,
}

#[derive(Deserialize, Debug)]
struct PrefixEntry {
    prefix: String,
}

#[derive(Deserialize, Debug)]
struct AsnData {
    #[serde(default)]
    name: Option<String>,
}

/// Prefixes announced by an ASN, split by family.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PrefixLists {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// Everything the fetcher resolves for one ASN.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AsnPrefixes {
    pub asn: u32,
    /// IPv4 CIDRs in source order.
    pub ipv4: Vec<String>,
    /// IPv6 CIDRs in source order.
    pub ipv6: Vec<String>,
    /// Registered name, or [`UNKNOWN_NAME`].
    pub name: String,
    /// Filesystem-safe form of `name`, never empty.
    pub slug: String,
}

impl AsnPrefixes {
    /// Combine prefix lists with a raw name as returned by the source.
    pub fn new(asn: u32, prefixes: PrefixLists, raw_name: Option<String>) -> AsnPrefixes {
        let name = resolve_name(raw_name);
        let slug = name_slug(&name, asn);
        AsnPrefixes {
            asn,
            ipv4: prefixes.ipv4,
            ipv6: prefixes.ipv6,
            name,
            slug,
        }
    }
}

/// Replace a missing or literal `null` name with [`UNKNOWN_NAME`].
pub fn resolve_name(raw_name: Option<String>) -> String {
    match raw_name {
        Some(name) if name != "null" => name,
        _ => UNKNOWN_NAME.to_string(),
    }
}

/// Lowercase, spaces to `_`, keep only `[a-z0-9_]`. Falls back to `asn<ASN>`.
pub fn name_slug(name: &str, asn: u32) -> String {
    let slug: String = name
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();
    if slug.is_empty() {
        format!("asn{asn}")
    } else {
        slug
    }
}

/// Decode an envelope, mapping empty bodies and bad JSON to [`AsnError::Fetch`]
/// and a non-"ok" status to [`AsnError::NotFound`].
fn parse_envelope<T>(asn: u32, url: &str, body: &str) -> Result<T, AsnError>
where
    T: for<'de> Deserialize<'de>,
{
    if body.trim().is_empty() {
        return Err(AsnError::Fetch {
            url: url.to_string(),
            message: "empty response".to_string(),
        });
    }

    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope: Envelope<T> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("RESPONSE START:\n\n{}\n\nRESPONSE END\n", body);
            AsnError::Fetch {
                url: url.to_string(),
                message: format!("Error parsing JSON: path={} error={}", e.path(), e),
            }
        })?;

    if envelope.status != "ok" {
        log::warn!(
            "AS{asn} status='{}' message={:?}",
            envelope.status,
            envelope.status_message
        );
        return Err(AsnError::NotFound {
            asn,
            status: envelope.status,
        });
    }

    envelope.data.ok_or_else(|| AsnError::Fetch {
        url: url.to_string(),
        message: "response has no data".to_string(),
    })
}

/// Parse the body of `/asn/<ASN>/prefixes`.
pub fn parse_prefixes_response(asn: u32, url: &str, body: &str) -> Result<PrefixLists, AsnError> {
    let data: PrefixData = parse_envelope(asn, url, body)?;
    Ok(PrefixLists {
        ipv4: data.ipv4_prefixes.into_iter().map(|p| p.prefix).collect(),
        ipv6: data.ipv6_prefixes.into_iter().map(|p| p.prefix).collect(),
    })
}

/// Parse the body of `/asn/<ASN>` and return the raw registered name.
pub fn parse_asn_response(asn: u32, url: &str, body: &str) -> Result<Option<String>, AsnError> {
    let data: AsnData = parse_envelope(asn, url, body)?;
    Ok(data.name)
}
