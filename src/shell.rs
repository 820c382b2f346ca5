//! Interactive prompts.
//!
//! Collects the confirmation, the ASN and the description, then hands off
//! to the fetcher and [`run_pipeline`]. Reader and writer are generic so
//! the whole dialog can run against in-memory buffers.

use crate::bgpview::BgpViewClient;
use crate::config::Settings;
use crate::error::AsnError;
use crate::output::summary_lines;
use crate::pipeline::{run_pipeline, RunSummary};
use crate::store::format_timestamp;
use crate::validate::validate_asn;
use colored::Colorize;
use std::io::{BufRead, Write};

pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

fn console_error(e: std::io::Error) -> AsnError {
    AsnError::io("<console>", e)
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Shell<R, W> {
        Shell { reader, writer }
    }

    /// Print `prompt` and read one line, without the line ending.
    /// End of input reads as an empty line.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, AsnError> {
        write!(self.writer, "{prompt}").map_err(console_error)?;
        self.writer.flush().map_err(console_error)?;

        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(console_error)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Yes/no question, only `y` or `yes` (any case) count as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool, AsnError> {
        let answer = self.prompt_line(&format!("{question} [y/N]: "))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    pub fn prompt_asn(&mut self) -> Result<u32, AsnError> {
        let input = self.prompt_line("ASN (1-64495): ")?;
        validate_asn(&input)
    }

    /// Free text applied verbatim to every address object.
    pub fn prompt_description(&mut self) -> Result<String, AsnError> {
        self.prompt_line("Description for the address objects: ")
    }

    pub fn print_summary(&mut self, summary: &RunSummary) -> Result<(), AsnError> {
        writeln!(self.writer).map_err(console_error)?;
        for line in summary_lines(summary) {
            writeln!(self.writer, "{line}").map_err(console_error)?;
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Run the full dialog.
///
/// # Returns
/// * `Ok(None)` - The operator declined, nothing was fetched or written
/// * `Ok(Some(RunSummary))` - Command file written
/// * `Err` - Any [`AsnError`], the run stops at the first one
pub async fn run_interactive<R: BufRead, W: Write>(
    settings: &Settings,
    shell: &mut Shell<R, W>,
) -> Result<Option<RunSummary>, AsnError> {
    if !shell.confirm("Generate Panorama address objects for an ASN?")? {
        log::info!("Operator declined, nothing to do");
        return Ok(None);
    }

    let asn = shell.prompt_asn()?;
    let client = BgpViewClient::new(settings)?;
    let prefixes = client.fetch(asn).await?;

    let description = shell.prompt_description()?;
    let timestamp = format_timestamp(&chrono::Utc::now().with_timezone(&settings.timezone));
    let summary = run_pipeline(settings, &prefixes, &description, &timestamp)?;

    log::info!(
        "{done} AS{asn} => {}",
        summary.commands_path.display(),
        done = "done".on_green()
    );
    shell.print_summary(&summary)?;
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Cursor;

    fn shell_with(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_line_strips_line_ending() {
        let mut shell = shell_with("hello world\r\nnext\n");
        assert_eq!(shell.prompt_line("> ").unwrap(), "hello world");
        assert_eq!(shell.prompt_line("> ").unwrap(), "next");
        assert_eq!(shell.prompt_line("> ").unwrap(), "");
        assert_eq!(String::from_utf8(shell.into_writer()).unwrap(), "> > > ");
    }

    #[test]
    fn test_confirm() {
        let cases = [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ];
        for (input, expected) in cases {
            let mut shell = shell_with(input);
            assert_eq!(shell.confirm("Go?").unwrap(), expected, "input={input:?}");
        }
    }

    #[test]
    fn test_prompt_asn() {
        assert_eq!(shell_with("13335\n").prompt_asn().unwrap(), 13335);
        assert!(matches!(
            shell_with("AS13335\n").prompt_asn(),
            Err(AsnError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_prompt_description_keeps_quotes() {
        let mut shell = shell_with("block \"bad\" actor\n");
        assert_eq!(shell.prompt_description().unwrap(), "block \"bad\" actor");
    }

    #[tokio::test]
    async fn test_run_interactive_declined() {
        let settings = Settings::default();
        let mut shell = shell_with("n\n");
        assert_eq!(run_interactive(&settings, &mut shell).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_run_interactive_invalid_asn_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let mut shell = shell_with("y\n64496\n");
        let err = run_interactive(&settings, &mut shell).await.unwrap_err();
        assert!(matches!(err, AsnError::InvalidInput { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_interactive_not_found_creates_nothing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/asn/64495/prefixes");
                then.status(200)
                    .body(r#"{"status":"error","status_message":"ASN not found"}"#);
            })
            .await;

        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_dir: dir.path().to_path_buf(),
            api_base: server.base_url(),
            ..Settings::default()
        };
        let mut shell = shell_with("y\n64495\nd\n");
        let err = run_interactive(&settings, &mut shell).await.unwrap_err();
        assert!(matches!(err, AsnError::NotFound { asn: 64495, .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_interactive_full() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/asn/64495/prefixes");
                then.status(200).body(
                    r#"{"status":"ok","data":{"ipv4_prefixes":[{"prefix":"192.0.2.0/24"}],"ipv6_prefixes":[]}}"#,
                );
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/asn/64495");
                then.status(200)
                    .body(r#"{"status":"ok","data":{"name":"Example Net"}}"#);
            })
            .await;

        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_dir: dir.path().to_path_buf(),
            api_base: server.base_url(),
            ..Settings::default()
        };
        let mut shell = shell_with("yes\n64495\nblocked by policy\n");
        let summary = run_interactive(&settings, &mut shell)
            .await
            .unwrap()
            .expect("summary expected");

        assert_eq!(summary.object_count, 1);
        assert_eq!(summary.asn_name, "Example Net");
        assert!(summary.ipv6_path.is_none());
        let text = std::fs::read_to_string(&summary.commands_path).unwrap();
        assert!(text.contains("description \"blocked by policy\""));

        let output = String::from_utf8(shell.into_writer()).unwrap();
        assert!(output.contains("AS64495 (Example Net)"));
    }
}
