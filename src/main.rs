use asn_prefix_commands::config::Settings;
use asn_prefix_commands::logging;
use asn_prefix_commands::shell::{run_interactive, Shell};
use colored::Colorize;
use std::error::Error;
use std::io;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    logging::init()?;
    log::info!("#Start main()");

    let settings = Settings::from_env()?;
    let mut shell = Shell::new(io::stdin().lock(), io::stdout());

    match run_interactive(&settings, &mut shell).await {
        Ok(Some(summary)) => {
            log::debug!("summary={}", serde_json::to_string(&summary)?);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    }
}
