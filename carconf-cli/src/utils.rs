//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: loading input
//! files, emitting configurations, and parsing `FIELD=VALUE` assignments.

use crate::error::CliError;
use carconf::config::{ConfigFormat, ConfigLoader};
use carconf::CarConfiguration;
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Load a configuration file, reporting a missing file as an argument error.
pub fn load_input(path: &Path) -> Result<CarConfiguration, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }
    ConfigLoader::load_file(path).map_err(CliError::from)
}

/// Write a configuration to `output`, or print it to stdout.
///
/// When writing a file the format follows the file extension; stdout uses
/// `format`. A written file is reported on stderr unless `--quiet` is set.
pub fn emit(
    config: &CarConfiguration,
    format: ConfigFormat,
    output: Option<&Path>,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            ConfigLoader::save_file(path, config)?;
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => print!("{}", ConfigLoader::render(config, format)?),
    }
    Ok(())
}

/// A single `FIELD=VALUE` update from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Overwrite the field with a value.
    Set {
        /// Field name.
        field: String,
        /// Raw value, parsed by the library.
        value: String,
    },
    /// Mark an optional field absent (`FIELD=` or `FIELD=~`).
    Unset {
        /// Field name.
        field: String,
    },
}

/// Parse a `FIELD=VALUE` assignment.
pub fn parse_assignment(raw: &str) -> Result<Assignment, CliError> {
    let (field, value) = raw.split_once('=').ok_or_else(|| {
        CliError::InvalidArguments(format!("expected FIELD=VALUE, got '{raw}'"))
    })?;

    let field = field.trim();
    if field.is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "missing field name in '{raw}'"
        )));
    }

    let value = value.trim();
    if value.is_empty() || value == "~" {
        Ok(Assignment::Unset {
            field: field.to_string(),
        })
    } else {
        Ok(Assignment::Set {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
