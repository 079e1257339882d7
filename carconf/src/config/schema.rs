//! Configuration schema definitions.
//!
//! This module defines the car configuration value, the validated newtypes
//! for its mandatory fields, and the enumerations used by its optional
//! fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error produced when a single field value is rejected.
///
/// Converted into [`crate::Error::InvalidConfiguration`] at the crate
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldError {
    /// The field whose value was rejected.
    pub field: &'static str,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for InvalidFieldError {}

/// A valid car identifier (1..=`u32::MAX`).
///
/// # Examples
///
/// ```
/// use carconf::CarId;
///
/// let id = CarId::try_from(123).unwrap();
/// assert_eq!(id.value(), 123);
///
/// assert!(CarId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CarId(u32);

impl CarId {
    /// The smallest valid identifier.
    pub const MIN: u32 = 1;

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CarId {
    type Error = InvalidFieldError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidFieldError {
                field: "id",
                reason: format!("must be at least {}, got {value}", Self::MIN),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<CarId> for u32 {
    fn from(id: CarId) -> Self {
        id.0
    }
}

impl FromStr for CarId {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| InvalidFieldError {
            field: "id",
            reason: format!("not a positive integer: {s}"),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A car brand name.
///
/// Brands are trimmed of surrounding whitespace, must be non-empty, must not
/// exceed [`Brand::MAX_LEN`] characters and must not contain control
/// characters.
///
/// # Examples
///
/// ```
/// use carconf::Brand;
///
/// let brand = Brand::try_from("  Audi ").unwrap();
/// assert_eq!(brand.as_str(), "Audi");
///
/// assert!(Brand::try_from("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Brand(String);

impl Brand {
    /// Maximum brand length in characters.
    pub const MAX_LEN: usize = 64;

    /// Returns the brand as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Brand {
    type Error = InvalidFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let reject = |reason: &str| InvalidFieldError {
            field: "brand",
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(reject("cannot be empty or only whitespace"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(reject("cannot contain control characters"));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(reject("cannot exceed 64 characters"));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for Brand {
    type Error = InvalidFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Brand> for String {
    fn from(brand: Brand) -> Self {
        brand.0
    }
}

impl FromStr for Brand {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declares a field enumeration with its kebab-case text form.
///
/// Parsing ignores case and `-`/`_`/space separators, so `CarPlay`,
/// `car-play` and `carplay` all name the same member. Deserialization goes
/// through the same parser; serialization always writes the kebab-case form.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case", try_from = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the kebab-case name of the member.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidFieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl FromStr for $name {
            type Err = InvalidFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = compact(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| compact(member.as_str()) == wanted)
                    .ok_or_else(|| InvalidFieldError {
                        field: $field,
                        reason: format!(
                            "unknown value '{}', expected one of: {}",
                            s.trim(),
                            Self::ALL
                                .iter()
                                .map(|m| m.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    })
            }
        }
    };
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

field_enum! {
    /// Engine type (mandatory).
    Engine, "engine" {
        /// Battery electric.
        Electric => "electric",
        /// Combustion plus electric.
        Hybrid => "hybrid",
        /// Diesel combustion.
        Diesel => "diesel",
        /// Petrol combustion.
        Petrol => "petrol",
        /// Hydrogen fuel cell.
        Hydrogen => "hydrogen",
        /// Liquefied natural gas.
        Lng => "lng",
    }
}

field_enum! {
    /// Parking camera option.
    ///
    /// `None` means "explicitly no camera" and is distinct from the field
    /// being absent on a configuration.
    Camera, "camera" {
        /// Front camera only.
        Front => "front",
        /// Rear camera only.
        Rear => "rear",
        /// Front and rear cameras.
        Both => "both",
        /// No camera.
        None => "none",
    }
}

field_enum! {
    /// Smartphone integration option.
    Smartphone, "smartphone" {
        /// Apple CarPlay.
        CarPlay => "car-play",
        /// Android Auto.
        AndroidAuto => "android-auto",
        /// Both integrations.
        Both => "both",
        /// No integration.
        None => "none",
    }
}

field_enum! {
    /// Driver assistance option.
    Adas, "adas" {
        /// Adaptive cruise control.
        AdaptiveControl => "adaptive-control",
        /// Lane-keeping copilot.
        Copilot => "copilot",
        /// Both systems.
        Both => "both",
        /// No assistance.
        None => "none",
    }
}

/// An immutable car configuration.
///
/// Mandatory fields (`id`, `brand`, `engine`) are always present; optional
/// fields (`camera`, `smartphone`, `adas`) are independently present or
/// absent. Two configurations are equal when all their fields are equal.
///
/// Instances are produced by [`crate::CarConfigurationBuilder::build`] or
/// deserialized from a document.
///
/// # Examples
///
/// ```
/// use carconf::{Camera, CarConfiguration, Engine};
///
/// let car = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
///     b.camera(Camera::Front);
/// })
/// .unwrap();
///
/// assert_eq!(car.id().value(), 123);
/// assert_eq!(car.camera(), Some(Camera::Front));
/// assert_eq!(car.adas(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarConfiguration {
    pub(crate) id: CarId,
    pub(crate) brand: Brand,
    pub(crate) engine: Engine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) camera: Option<Camera>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) smartphone: Option<Smartphone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) adas: Option<Adas>,
}

impl CarConfiguration {
    /// Returns the car identifier.
    #[must_use]
    pub const fn id(&self) -> CarId {
        self.id
    }

    /// Returns the brand.
    #[must_use]
    pub const fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Returns the engine type.
    #[must_use]
    pub const fn engine(&self) -> Engine {
        self.engine
    }

    /// Returns the camera option, if present.
    #[must_use]
    pub const fn camera(&self) -> Option<Camera> {
        self.camera
    }

    /// Returns the smartphone integration, if present.
    #[must_use]
    pub const fn smartphone(&self) -> Option<Smartphone> {
        self.smartphone
    }

    /// Returns the driver assistance option, if present.
    #[must_use]
    pub const fn adas(&self) -> Option<Adas> {
        self.adas
    }
}

fn or_dash<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for CarConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[id={}, brand={}, engine={}, camera={}, smartphone={}, adas={}]",
            self.id,
            self.brand,
            self.engine,
            or_dash(self.camera),
            or_dash(self.smartphone),
            or_dash(self.adas)
        )
    }
}
