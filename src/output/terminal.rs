//! Terminal output utilities.
//!
//! Provides the end-of-run summary shown to the operator.

use crate::pipeline::RunSummary;
use colored::Colorize;

/// Format a value as a right-aligned field of at least `width` chars.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

/// Summary lines, labels right-aligned in one column.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    const WIDTH: usize = 14;
    let row = |label: &str, value: String| format!("{}: {value}", format_field(label, WIDTH));

    let ipv6 = match &summary.ipv6_path {
        Some(path) => path.display().to_string(),
        None => "none".to_string(),
    };

    vec![
        format!("{}", "Summary".bold()),
        row("ASN", format!("AS{} ({})", summary.asn, summary.asn_name)),
        row("IPv4 prefixes", summary.ipv4_count.to_string()),
        row("IPv6 prefixes", summary.ipv6_count.to_string()),
        row("IPv4 file", summary.ipv4_path.display().to_string()),
        row("IPv6 file", ipv6),
        row(
            "Commands file",
            summary.commands_path.display().to_string().green().to_string(),
        ),
        row("Address group", summary.group_name.clone()),
        row("Objects", summary.object_count.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "      test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "  42");
    }

    #[test]
    fn test_summary_lines() {
        colored::control::set_override(false);
        let summary = RunSummary {
            asn: 64500,
            asn_name: "Example Net".to_string(),
            ipv4_count: 2,
            ipv6_count: 0,
            ipv4_path: PathBuf::from("example_net_as64500_ipv4_t.txt"),
            ipv6_path: None,
            commands_path: PathBuf::from("example_net_as64500_ipv4_t.commands.txt"),
            group_name: "2025_ASN64500".to_string(),
            object_count: 2,
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "           ASN: AS64500 (Example Net)");
        assert_eq!(lines[5], "     IPv6 file: none");
        assert_eq!(lines[8], "       Objects: 2");
    }
}
