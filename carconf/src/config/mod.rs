//! Configuration model for carconf.
//!
//! This module provides:
//! - The immutable [`CarConfiguration`] value and its field types
//! - [`CarConfigurationBuilder`] for fresh construction, fluent updates and
//!   merge-updates
//! - Right-biased merging via [`merge`] and [`merge_all`]
//! - Fully-optional [`DriverProfile`] values sharing the same merge rules
//! - YAML/JSON documents via [`ConfigLoader`]
//! - `CARCONF_*` environment overrides via [`EnvironmentConfig`]
//!
//! # Merge Rules
//!
//! Merging an update onto a base (highest precedence last):
//!
//! 1. Mandatory fields (`id`, `brand`, `engine`) always take the update's value
//! 2. Optional fields take the update's value when it is present
//! 3. Optional fields absent in the update keep the base's value
//!
//! # Examples
//!
//! ```
//! use carconf::config::{merge, CarConfiguration, Engine, Adas, Camera};
//!
//! let base = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
//!     b.camera(Camera::Front);
//! })
//! .unwrap();
//! let update = CarConfiguration::build_with(124, "VW", Engine::Electric, |b| {
//!     b.adas(Adas::Copilot);
//! })
//! .unwrap();
//!
//! let merged = merge(&base, &update);
//! assert_eq!(merged.brand().as_str(), "VW");
//! assert_eq!(merged.camera(), Some(Camera::Front));
//! assert_eq!(merged.adas(), Some(Adas::Copilot));
//! ```

pub mod builder;
pub mod environment;
pub mod field;
pub mod loader;
pub mod merger;
pub mod profile;
pub mod schema;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::CarConfigurationBuilder;
pub use environment::{EnvironmentConfig, ENV_PREFIX};
pub use field::Field;
pub use loader::{ConfigFormat, ConfigLoader};
pub use merger::{merge, merge_all, MergeBuilder, Mergeable};
pub use profile::{DriverProfile, DriverProfileBuilder};
pub use schema::{
    Adas, Brand, Camera, CarConfiguration, CarId, Engine, InvalidFieldError, Smartphone,
};
