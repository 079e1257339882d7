//! Environment variable handling for configuration overrides.
//!
//! Each field of a car configuration can be overridden with a
//! `CARCONF_<FIELD>` variable. Overrides are applied through
//! [`CarConfigurationBuilder::set_field`], so they obey the same parsing and
//! validation as by-name updates. An empty value clears an optional field.

use std::env;

use crate::config::builder::CarConfigurationBuilder;
use crate::config::field::Field;
use crate::error::{Error, Result};

/// Prefix shared by all override variables.
pub const ENV_PREFIX: &str = "CARCONF_";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use carconf::config::EnvironmentConfig;
/// use carconf::{CarConfigurationBuilder, Engine};
///
/// let mut builder = CarConfigurationBuilder::create(1, "VW", Engine::Petrol).unwrap();
/// EnvironmentConfig::apply_overrides(&mut builder).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Returns the variable name overriding `field`, e.g. `CARCONF_ADAS`.
    #[must_use]
    pub fn variable_name(field: Field) -> String {
        format!("{ENV_PREFIX}{}", field.name().to_ascii_uppercase())
    }

    /// Apply every `CARCONF_*` override found in the process environment.
    ///
    /// Returns the number of overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the variable if a value
    /// cannot be applied. The builder is unchanged on error.
    pub fn apply_overrides(builder: &mut CarConfigurationBuilder) -> Result<usize> {
        let mut staged = builder.clone();
        let mut applied = 0;

        for field in Field::ALL {
            let variable = Self::variable_name(field);
            let Ok(value) = env::var(&variable) else {
                continue;
            };

            Self::apply_one(&mut staged, field, &value).map_err(|err| match err {
                Error::InvalidConfiguration { reason, .. } => {
                    Error::invalid(variable.clone(), reason)
                }
                other => other,
            })?;
            log::debug!("applied override {variable}={value:?}");
            applied += 1;
        }

        *builder = staged;
        Ok(applied)
    }

    fn apply_one(builder: &mut CarConfigurationBuilder, field: Field, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            builder.unset_field(field.name())?;
        } else {
            builder.set_field(field.name(), value)?;
        }
        Ok(())
    }
}
