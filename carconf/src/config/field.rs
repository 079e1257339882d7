//! By-name field access for car configurations.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A field of [`crate::CarConfiguration`], addressed by name.
///
/// # Examples
///
/// ```
/// use carconf::config::Field;
///
/// let field: Field = "smartphone".parse().unwrap();
/// assert_eq!(field, Field::Smartphone);
/// assert!(!field.is_mandatory());
///
/// assert!("wheels".parse::<Field>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Mandatory car identifier.
    Id,
    /// Mandatory brand name.
    Brand,
    /// Mandatory engine type.
    Engine,
    /// Optional camera.
    Camera,
    /// Optional smartphone integration.
    Smartphone,
    /// Optional driver assistance.
    Adas,
}

impl Field {
    /// Every field, mandatory fields first.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Brand,
        Self::Engine,
        Self::Camera,
        Self::Smartphone,
        Self::Adas,
    ];

    /// Returns the field's name as used in documents and by-name access.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::Engine => "engine",
            Self::Camera => "camera",
            Self::Smartphone => "smartphone",
            Self::Adas => "adas",
        }
    }

    /// Returns `true` for fields that can never be absent.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Id | Self::Brand | Self::Engine)
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| Error::UnknownField {
                name: s.trim().to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert_eq!(" ADAS ".parse::<Field>().unwrap(), Field::Adas);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "wheels".parse::<Field>().unwrap_err();
        assert!(err.is_unknown_field());
        assert!(err.to_string().contains("wheels"));
    }

    #[test]
    fn test_mandatory_fields() {
        let mandatory: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_mandatory()).collect();
        assert_eq!(mandatory, vec![Field::Id, Field::Brand, Field::Engine]);
    }
}
