//! Command file writer.

use crate::error::AsnError;
use crate::generator::GeneratedCommands;
use std::path::Path;

/// Write the generated script to `path`, replacing any existing file.
pub fn write_commands_file(path: &Path, commands: &GeneratedCommands) -> Result<(), AsnError> {
    std::fs::write(path, commands.to_text()).map_err(|e| AsnError::io(path, e))?;
    log::info!(
        "Wrote {} lines ({} objects) to {}",
        commands.lines.len(),
        commands.count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn test_write_commands_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.commands.txt");
        let commands = generate(&["192.0.2.0/24"], 1, "External", "2025_", "ASN_Blocks", "d");
        write_commands_file(&path, &commands).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), commands.lines.len());
        assert_eq!(text, commands.to_text());
    }

    #[test]
    fn test_write_commands_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/x.commands.txt");
        let commands = generate::<&str>(&[], 1, "External", "2025_", "ASN_Blocks", "d");
        assert!(matches!(
            write_commands_file(&path, &commands),
            Err(AsnError::Io { .. })
        ));
    }
}
