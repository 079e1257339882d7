//! Driver profiles: configurations whose every field is optional.
//!
//! With no mandatory fields, merging a profile is a plain per-field
//! coalesce and the empty profile is an identity on both sides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::merger::{MergeBuilder, Mergeable};
use crate::error::{Error, Result};

/// An immutable driver profile.
///
/// # Examples
///
/// ```
/// use carconf::DriverProfile;
///
/// let profile = DriverProfile::builder().id(11).name("Alex").build();
/// assert_eq!(profile.to_string(), "[id=11, name=Alex]");
///
/// let renamed = DriverProfile::update(&profile, &DriverProfile::builder().name("Divna").build());
/// assert_eq!(renamed.to_string(), "[id=11, name=Divna]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl DriverProfile {
    /// Creates an empty builder.
    #[must_use]
    pub fn builder() -> DriverProfileBuilder {
        DriverProfileBuilder::new()
    }

    /// Returns the driver identifier, if present.
    #[must_use]
    pub const fn id(&self) -> Option<u32> {
        self.id
    }

    /// Returns the driver name, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Applies a partial update `new` on top of `current`.
    #[must_use]
    pub fn update(current: &Self, new: &Self) -> Self {
        DriverProfileBuilder::from_existing(current)
            .merge_update(new)
            .build()
    }
}

impl fmt::Display for DriverProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        write!(f, "[id={id}, name={}]", self.name.as_deref().unwrap_or("-"))
    }
}

/// Mutable staging object for a [`DriverProfile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverProfileBuilder {
    id: Option<u32>,
    name: Option<String>,
}

impl DriverProfileBuilder {
    /// Creates a builder with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding a copy of `profile`.
    #[must_use]
    pub fn from_existing(profile: &DriverProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
        }
    }

    /// Sets the driver identifier.
    pub fn id(&mut self, id: u32) -> &mut Self {
        self.id = Some(id);
        self
    }

    /// Sets the driver name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Takes every field present in `update`.
    pub fn merge_update(&mut self, update: &DriverProfile) -> &mut Self {
        if let Some(id) = update.id {
            self.id = Some(id);
        }
        if let Some(name) = &update.name {
            self.name = Some(name.clone());
        }
        self
    }

    /// Builds the profile.
    #[must_use]
    pub fn build(&self) -> DriverProfile {
        DriverProfile {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl MergeBuilder for DriverProfileBuilder {
    type Output = DriverProfile;

    fn merge_update(&mut self, update: &DriverProfile) -> &mut Self {
        Self::merge_update(self, update)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        match name.trim() {
            "id" => {
                let id = value.trim().parse().map_err(|_| {
                    Error::invalid("id", format!("not a non-negative integer: {value}"))
                })?;
                self.id = Some(id);
            }
            "name" => self.name = Some(value.to_string()),
            other => {
                return Err(Error::UnknownField {
                    name: other.to_string(),
                })
            }
        }
        Ok(self)
    }

    fn unset_field(&mut self, name: &str) -> Result<&mut Self> {
        match name.trim() {
            "id" => self.id = None,
            "name" => self.name = None,
            other => {
                return Err(Error::UnknownField {
                    name: other.to_string(),
                })
            }
        }
        Ok(self)
    }

    fn build(&self) -> DriverProfile {
        Self::build(self)
    }
}

impl Mergeable for DriverProfile {
    type Builder = DriverProfileBuilder;

    fn to_builder(&self) -> DriverProfileBuilder {
        DriverProfileBuilder::from_existing(self)
    }
}
