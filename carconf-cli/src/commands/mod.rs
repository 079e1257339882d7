//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `create`: Create a configuration from its fields
//! - `merge`: Merge partial updates onto a base configuration
//! - `set`: Update fields of a configuration by name
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod create;
pub mod merge;
pub mod set;
pub mod validate;

pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use merge::MergeCommand;
pub use set::SetCommand;
pub use validate::ValidateCommand;
