//! Merge command implementation.
//!
//! This module implements the `merge` command, which applies partial
//! updates onto a base configuration, lowest precedence first.

use crate::error::CliError;
use crate::utils::{emit, load_input, GlobalOptions};
use carconf::config::{ConfigFormat, EnvironmentConfig};
use carconf::CarConfigurationBuilder;
use clap::Args;
use std::path::PathBuf;

/// Merge partial updates onto a base configuration.
#[derive(Args)]
pub struct MergeCommand {
    /// Base configuration file
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Update files, applied left to right
    #[arg(value_name = "UPDATE", required = true)]
    pub updates: Vec<PathBuf>,

    /// Apply CARCONF_* environment overrides after the updates
    #[arg(long)]
    pub env: bool,

    /// Format used when printing to stdout
    #[arg(long, value_name = "FORMAT", default_value = "yaml")]
    pub format: ConfigFormat,

    /// Write to a file instead of stdout (format follows the extension)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl MergeCommand {
    /// Execute the merge command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load every input before merging so a bad file produces no output
        let base = load_input(&self.base)?;
        let updates = self
            .updates
            .iter()
            .map(|path| load_input(path))
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Fold the updates onto the base
        let mut builder = CarConfigurationBuilder::from_existing(&base);
        for (path, update) in self.updates.iter().zip(&updates) {
            log::info!("applying {}", path.display());
            builder.merge_update(update);
        }

        // 3. Environment overrides form the last layer
        if self.env {
            let applied = EnvironmentConfig::apply_overrides(&mut builder)?;
            log::info!("applied {applied} environment override(s)");
        }

        emit(&builder.build(), self.format, self.output.as_deref(), global)
    }
}
