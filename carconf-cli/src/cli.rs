//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CreateCommand, MergeCommand, SetCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for building and merging car configurations.
#[derive(Parser)]
#[command(name = "carconf")]
#[command(version, about = "Build and merge car configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a configuration from its fields
    Create(CreateCommand),

    /// Merge partial updates onto a base configuration
    Merge(MergeCommand),

    /// Update fields of a configuration by name
    Set(SetCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
