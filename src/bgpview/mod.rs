//! BGPView prefix data source.
//!
//! - [`client`] - HTTP calls against the public API
//! - [`models`] - Response shapes, parsing and name slugs

mod client;
mod models;

pub use client::BgpViewClient;
pub use models::{
    name_slug, parse_asn_response, parse_prefixes_response, resolve_name, AsnPrefixes,
    PrefixLists, UNKNOWN_NAME,
};
