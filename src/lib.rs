//! Generate Panorama address objects for the prefixes an ASN announces.
//!
//! Flow: [`validate`] the ASN, fetch from [`bgpview`], write prefix lists
//! with [`store`], turn the IPv4 list into set-commands with [`generator`]
//! and write them out. [`pipeline`] ties the offline steps together and
//! [`shell`] is the interactive front end.

pub mod bgpview;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod shell;
pub mod store;
pub mod validate;

pub use error::AsnError;
pub use generator::{generate, GeneratedCommands, GroupMode};
pub use pipeline::{run_pipeline, RunSummary};
