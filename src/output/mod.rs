//! Output of generated commands.
//!
//! - [`commands`] - Command file writer
//! - [`terminal`] - Run summary for the operator

mod commands;
mod terminal;

pub use commands::write_commands_file;
pub use terminal::{format_field, summary_lines};
