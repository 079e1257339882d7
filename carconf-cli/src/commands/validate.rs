//! Command to validate a car configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use carconf::config::ConfigLoader;
use clap::Args;
use std::path::PathBuf;

/// Validate a car configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse; field constraints are checked while deserializing
        match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => {
                log::info!("parsed {config}");
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(e) if e.is_parse_error() || e.is_invalid_configuration() => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
