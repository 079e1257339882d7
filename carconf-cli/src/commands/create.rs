//! Create command implementation.
//!
//! This module implements the `create` command, which builds a new
//! configuration from its mandatory fields and any optional fields given.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use carconf::config::ConfigFormat;
use carconf::{Adas, Camera, CarConfigurationBuilder, Engine, Smartphone};
use clap::Args;
use std::path::PathBuf;

/// Create a configuration from its fields.
#[derive(Args)]
pub struct CreateCommand {
    /// Car identifier (1 or greater)
    #[arg(long, value_name = "ID")]
    pub id: u32,

    /// Brand name
    #[arg(long, value_name = "BRAND")]
    pub brand: String,

    /// Engine type (electric, hybrid, diesel, petrol, hydrogen, lng)
    #[arg(long, value_name = "ENGINE")]
    pub engine: Engine,

    /// Camera option (front, rear, both, none)
    #[arg(long, value_name = "CAMERA")]
    pub camera: Option<Camera>,

    /// Smartphone integration (car-play, android-auto, both, none)
    #[arg(long, value_name = "SMARTPHONE")]
    pub smartphone: Option<Smartphone>,

    /// Driver assistance (adaptive-control, copilot, both, none)
    #[arg(long, value_name = "ADAS")]
    pub adas: Option<Adas>,

    /// Format used when printing to stdout
    #[arg(long, value_name = "FORMAT", default_value = "yaml")]
    pub format: ConfigFormat,

    /// Write to a file instead of stdout (format follows the extension)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = CarConfigurationBuilder::create(self.id, &self.brand, self.engine)?;

        if let Some(camera) = self.camera {
            builder.camera(camera);
        }
        if let Some(smartphone) = self.smartphone {
            builder.smartphone(smartphone);
        }
        if let Some(adas) = self.adas {
            builder.adas(adas);
        }

        let config = builder.build();
        log::info!("created {config}");
        emit(&config, self.format, self.output.as_deref(), global)
    }
}
