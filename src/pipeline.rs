//! Store, generate and write, with every input passed in explicitly.

use crate::bgpview::AsnPrefixes;
use crate::config::Settings;
use crate::error::AsnError;
use crate::generator::{generate_with_mode, group_name};
use crate::output::write_commands_file;
use crate::store::{commands_file_path, read_prefix_file, store_prefixes};
use serde::Serialize;
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub asn: u32,
    pub asn_name: String,
    pub ipv4_count: usize,
    pub ipv6_count: usize,
    pub ipv4_path: PathBuf,
    pub ipv6_path: Option<PathBuf>,
    pub commands_path: PathBuf,
    pub group_name: String,
    /// Address objects emitted, one per non-blank IPv4 line.
    pub object_count: usize,
}

/// Run the non-interactive part of the tool for an already fetched ASN.
///
/// The IPv4 list is read back from the stored file so the command file
/// always matches what was written to disk.
pub fn run_pipeline(
    settings: &Settings,
    prefixes: &AsnPrefixes,
    description: &str,
    timestamp: &str,
) -> Result<RunSummary, AsnError> {
    log::info!("#Start run_pipeline() AS{} '{}'", prefixes.asn, prefixes.name);

    let stored = store_prefixes(&settings.output_dir, prefixes, timestamp)?;
    let ipv4 = read_prefix_file(&stored.ipv4_path)?;

    let commands = generate_with_mode(
        &ipv4,
        prefixes.asn,
        &settings.device_group,
        &settings.object_prefix,
        &settings.tag,
        description,
        settings.group_mode,
    );

    let commands_path = commands_file_path(&stored.ipv4_path);
    write_commands_file(&commands_path, &commands)?;

    Ok(RunSummary {
        asn: prefixes.asn,
        asn_name: prefixes.name.clone(),
        ipv4_count: ipv4.len(),
        ipv6_count: prefixes.ipv6.iter().filter(|p| !p.trim().is_empty()).count(),
        ipv4_path: stored.ipv4_path,
        ipv6_path: stored.ipv6_path,
        commands_path,
        group_name: group_name(&settings.object_prefix, prefixes.asn),
        object_count: commands.count(),
    })
}
