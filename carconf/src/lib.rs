#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # carconf
//!
//! A library for building car configurations and merging partial updates
//! onto them.
//!
//! ## Core Types
//!
//! - [`CarConfiguration`]: immutable configuration with mandatory and
//!   optional fields
//! - [`CarConfigurationBuilder`]: staging object for construction and
//!   merge-updates
//! - [`merge`]: right-biased merge of an update onto a base
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use carconf::{merge, Adas, Camera, CarConfiguration, Engine, Smartphone};
//!
//! let base = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
//!     b.camera(Camera::Front).smartphone(Smartphone::CarPlay);
//! })
//! .unwrap();
//!
//! // Only the fields present in the update change.
//! let update = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
//!     b.adas(Adas::AdaptiveControl);
//! })
//! .unwrap();
//!
//! let merged = merge(&base, &update);
//! assert_eq!(merged.camera(), Some(Camera::Front));
//! assert_eq!(merged.adas(), Some(Adas::AdaptiveControl));
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{
    merge, merge_all, Adas, Brand, Camera, CarConfiguration, CarConfigurationBuilder, CarId,
    DriverProfile, DriverProfileBuilder, Engine, MergeBuilder, Mergeable, Smartphone,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
