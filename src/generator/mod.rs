//! Panorama set-command generation.
//!
//! Turns an ordered list of CIDR lines into a `set device-group ...` script:
//! one address object per non-blank line plus membership in a single
//! address group.
//!
//! - [`naming`] - Object and group name derivation

mod naming;

pub use naming::{cidr_name, group_name, is_valid_cidr, object_name, split_cidr};

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Opens the CLI session. Followed by a header comment naming the device group.
pub const PREAMBLE: [&str; 3] = [
    "set cli config-output-format set",
    "set cli scripting-mode on",
    "configure",
];

/// Commits and restores the CLI output settings.
pub const POSTAMBLE: [&str; 10] = [
    "",
    "# End of configuration",
    "",
    "commit",
    "",
    "exit",
    "set cli config-output-format default",
    "set cli scripting-mode off",
    "",
    "exit",
];

/// How group membership is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// One `static [ OBJ ]` statement per object. Panorama merges repeated
    /// static statements for the same group.
    #[default]
    RepeatPerItem,
    /// A single `static [ OBJ1 OBJ2 ... ]` statement after all objects,
    /// plus a tag on the group.
    Consolidated,
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "repeat" | "repeat-per-item" | "per-item" => Ok(GroupMode::RepeatPerItem),
            "consolidated" | "single" => Ok(GroupMode::Consolidated),
            other => Err(format!(
                "unknown group mode '{other}', expected 'repeat' or 'consolidated'"
            )),
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupMode::RepeatPerItem => write!(f, "repeat"),
            GroupMode::Consolidated => write!(f, "consolidated"),
        }
    }
}

/// Generated script plus the group members in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedCommands {
    pub lines: Vec<String>,
    /// Object names, one per processed prefix, duplicates kept.
    pub members: Vec<String>,
}

impl GeneratedCommands {
    /// Number of prefixes turned into address objects.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// The script as file content, newline terminated.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Generate the script with one static-member statement per object.
pub fn generate<S: AsRef<str>>(
    prefixes: &[S],
    asn: u32,
    device_group: &str,
    object_prefix: &str,
    tag: &str,
    description: &str,
) -> GeneratedCommands {
    generate_with_mode(
        prefixes,
        asn,
        device_group,
        object_prefix,
        tag,
        description,
        GroupMode::RepeatPerItem,
    )
}

/// Generate the script using `mode` for group membership.
///
/// Lines that are not valid CIDRs are passed through unchanged and logged.
pub fn generate_with_mode<S: AsRef<str>>(
    prefixes: &[S],
    asn: u32,
    device_group: &str,
    object_prefix: &str,
    tag: &str,
    description: &str,
    mode: GroupMode,
) -> GeneratedCommands {
    let mut out = GeneratedCommands::default();
    let group = group_name(object_prefix, asn);
    let dg = format!("set device-group {device_group}");

    out.lines.extend(PREAMBLE.iter().map(|s| s.to_string()));
    out.lines.push(format!("# Address objects for device-group {device_group}"));

    for cidr in prefixes.iter().map(|p| p.as_ref().trim()) {
        if cidr.is_empty() {
            continue;
        }
        if !is_valid_cidr(cidr) {
            log::warn!("AS{asn}: '{cidr}' is not a valid CIDR, emitting as-is");
        }
        let obj = object_name(object_prefix, asn, cidr);

        out.lines.push(format!("{dg} address {obj} ip-netmask {cidr}"));
        out.lines.push(format!("{dg} address {obj} tag [ {tag} ]"));
        out.lines.push(format!("{dg} address {obj} description \"{description}\""));
        out.lines.push(format!("{dg} address {obj} disable-override no"));
        if mode == GroupMode::RepeatPerItem {
            out.lines.push(format!("{dg} address-group {group} static [ {obj} ]"));
        }

        out.members.push(obj);
    }

    if mode == GroupMode::Consolidated && !out.members.is_empty() {
        out.lines.push(format!(
            "{dg} address-group {group} static [ {} ]",
            out.members.iter().join(" ")
        ));
        out.lines.push(format!("{dg} address-group {group} tag [ {tag} ]"));
    }

    out.lines.extend(POSTAMBLE.iter().map(|s| s.to_string()));

    log::info!(
        "AS{asn}: generated {} objects for group {group} ({mode}), {} lines",
        out.count(),
        out.lines.len()
    );
    out
}
