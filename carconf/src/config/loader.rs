//! Configuration file loading and saving.
//!
//! Configurations are stored as YAML (`.yaml`/`.yml`) or JSON (`.json`)
//! documents. Absent optional fields are omitted when writing and read back
//! as absent.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::builder::CarConfigurationBuilder;
use crate::config::field::Field;
use crate::config::schema::CarConfiguration;
use crate::error::{Error, Result};

/// Document format of a stored configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any extension other than
    /// `yaml`, `yml` or `json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::config::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("car.yml")).unwrap(), ConfigFormat::Yaml);
    /// assert_eq!(ConfigFormat::from_path(Path::new("car.JSON")).unwrap(), ConfigFormat::Json);
    /// assert!(ConfigFormat::from_path(Path::new("car.toml")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid format: {s}")),
        }
    }
}

/// Shape of a stored configuration before its values are checked.
///
/// Values are kept as text so a rejected value is reported as
/// [`Error::InvalidConfiguration`], the same as a by-name update, rather
/// than as a syntax error of the document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CarDocument {
    id: u32,
    brand: String,
    engine: String,
    #[serde(default)]
    camera: Option<String>,
    #[serde(default)]
    smartphone: Option<String>,
    #[serde(default)]
    adas: Option<String>,
}

impl CarDocument {
    fn into_configuration(self) -> Result<CarConfiguration> {
        let engine = self.engine.parse()?;
        let mut builder = CarConfigurationBuilder::create(self.id, &self.brand, engine)?;
        let optionals = [
            (Field::Camera, self.camera),
            (Field::Smartphone, self.smartphone),
            (Field::Adas, self.adas),
        ];
        for (field, value) in optionals {
            if let Some(value) = value {
                builder.set_field(field.name(), &value)?;
            }
        }
        Ok(builder.build())
    }
}

/// Reads and writes configuration documents.
///
/// # Examples
///
/// ```
/// use carconf::config::{ConfigFormat, ConfigLoader};
///
/// let car = ConfigLoader::parse("id: 123\nbrand: Audi\nengine: diesel\n", ConfigFormat::Yaml).unwrap();
/// assert_eq!(car.brand().as_str(), "Audi");
///
/// let json = ConfigLoader::render(&car, ConfigFormat::Json).unwrap();
/// assert!(json.contains("\"engine\": \"diesel\""));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] or [`Error::Json`] if the document is malformed,
    /// has unknown keys or misses a mandatory field, and
    /// [`Error::InvalidConfiguration`] if a value violates a field constraint.
    ///
    /// Enumeration values are parsed leniently, as on the command line, so
    /// `CarPlay`, `car_play` and `car-play` are all accepted.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<CarConfiguration> {
        let document: CarDocument = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        };
        document.into_configuration()
    }

    /// Renders a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(config: &CarConfiguration, format: ConfigFormat) -> Result<String> {
        let rendered = match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => {
                let mut json = serde_json::to_string_pretty(config)?;
                json.push('\n');
                json
            }
        };
        Ok(rendered)
    }

    /// Loads a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read, or its contents do not parse.
    pub fn load_file(path: &Path) -> Result<CarConfiguration> {
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        log::debug!("loading {format} configuration from {}", path.display());
        Self::parse(&contents, format)
    }

    /// Saves a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported or the file cannot be
    /// written.
    pub fn save_file(path: &Path, config: &CarConfiguration) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let rendered = Self::render(config, format)?;
        fs::write(path, rendered)?;
        log::debug!("saved {format} configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Adas, Camera, Engine, Smartphone};
    use tempfile::TempDir;

    fn sample() -> CarConfiguration {
        CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
            b.camera(Camera::Front).smartphone(Smartphone::CarPlay);
        })
        .unwrap()
    }

    #[test]
    fn test_parse_yaml_with_absent_optionals() {
        let yaml = "id: 124\nbrand: VW\nengine: electric\ncamera: rear\n";
        let car = ConfigLoader::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(car.id().value(), 124);
        assert_eq!(car.camera(), Some(Camera::Rear));
        assert_eq!(car.smartphone(), None);
        assert_eq!(car.adas(), None);
    }

    #[test]
    fn test_parse_rejects_invalid_documents() {
        let missing = "id: 1\nbrand: VW\n";
        assert!(ConfigLoader::parse(missing, ConfigFormat::Yaml)
            .unwrap_err()
            .is_parse_error());

        let unknown = "id: 1\nbrand: VW\nengine: lng\nwheels: 4\n";
        assert!(ConfigLoader::parse(unknown, ConfigFormat::Yaml)
            .unwrap_err()
            .is_parse_error());
    }

    #[test]
    fn test_parse_reports_rejected_values_as_invalid_configuration() {
        let zero_id = r#"{"id": 0, "brand": "VW", "engine": "lng"}"#;
        let err = ConfigLoader::parse(zero_id, ConfigFormat::Json).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("at least 1"));

        let blank_brand = "id: 1\nbrand: '  '\nengine: lng\n";
        assert!(ConfigLoader::parse(blank_brand, ConfigFormat::Yaml)
            .unwrap_err()
            .is_invalid_configuration());

        let bad_camera = "id: 1\nbrand: VW\nengine: lng\ncamera: sideways\n";
        let err = ConfigLoader::parse(bad_camera, ConfigFormat::Yaml).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_parse_accepts_lenient_enum_forms() {
        let yaml = "id: 1\nbrand: VW\nengine: Hybrid\nsmartphone: CarPlay\nadas: adaptive_control\n";
        let car = ConfigLoader::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(car.engine(), Engine::Hybrid);
        assert_eq!(car.smartphone(), Some(Smartphone::CarPlay));
        assert_eq!(car.adas(), Some(Adas::AdaptiveControl));
    }

    #[test]
    fn test_render_yaml_omits_absent_optionals() {
        let yaml = ConfigLoader::render(&sample(), ConfigFormat::Yaml).unwrap();
        assert_eq!(
            yaml,
            "id: 123\nbrand: Audi\nengine: diesel\ncamera: front\nsmartphone: car-play\n"
        );
    }

    #[test]
    fn test_save_and_load_files() {
        let dir = TempDir::new().unwrap();
        for name in ["car.yaml", "car.yml", "car.json"] {
            let path = dir.path().join(name);
            ConfigLoader::save_file(&path, &sample()).unwrap();
            assert_eq!(ConfigLoader::load_file(&path).unwrap(), sample());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigLoader::load_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("car.toml");
        let err = ConfigLoader::save_file(&path, &sample()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("YAML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert!("toml".parse::<ConfigFormat>().is_err());
        assert_eq!(ConfigFormat::default(), ConfigFormat::Yaml);
    }
}
