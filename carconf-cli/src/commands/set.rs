//! Set command implementation.
//!
//! This module implements the `set` command, which updates fields of an
//! existing configuration by name.

use crate::error::CliError;
use crate::utils::{emit, load_input, parse_assignment, Assignment, GlobalOptions};
use carconf::config::ConfigFormat;
use carconf::CarConfigurationBuilder;
use clap::Args;
use std::path::PathBuf;

/// Update fields of a configuration by name.
#[derive(Args)]
pub struct SetCommand {
    /// Configuration file to update
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Assignments such as camera=rear; FIELD= clears an optional field
    #[arg(value_name = "FIELD=VALUE", required = true)]
    pub assignments: Vec<String>,

    /// Write the result back to FILE instead of printing it
    #[arg(long, short = 'i')]
    pub in_place: bool,

    /// Format used when printing to stdout
    #[arg(long, value_name = "FORMAT", default_value = "yaml")]
    pub format: ConfigFormat,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse all assignments up front
        let assignments = self
            .assignments
            .iter()
            .map(|raw| parse_assignment(raw))
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Apply them to a copy of the current configuration
        let current = load_input(&self.file)?;
        let mut builder = CarConfigurationBuilder::from_existing(&current);
        for assignment in &assignments {
            match assignment {
                Assignment::Set { field, value } => builder.set_field(field, value)?,
                Assignment::Unset { field } => builder.unset_field(field)?,
            };
        }
        let updated = builder.build();
        if global.verbose {
            eprintln!(
                "Applied {} assignment(s) to {}",
                assignments.len(),
                self.file.display()
            );
        }

        // 3. Emit
        let output = self.in_place.then_some(self.file.as_path());
        emit(&updated, self.format, output, global)
    }
}
