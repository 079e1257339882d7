//! Builder for car configurations.
//!
//! A [`CarConfigurationBuilder`] is created either from the mandatory fields
//! or from an existing configuration, mutated through fluent setters, by-name
//! access or [`CarConfigurationBuilder::merge_update`], and turned into an
//! immutable [`CarConfiguration`] with [`CarConfigurationBuilder::build`].
//!
//! # Examples
//!
//! ```
//! use carconf::{Camera, CarConfigurationBuilder, Engine};
//!
//! let mut builder = CarConfigurationBuilder::create(123, "Audi", Engine::Diesel).unwrap();
//! let first = builder.camera(Camera::Front).build();
//!
//! // The builder stays usable; earlier snapshots are unaffected.
//! let second = builder.camera(Camera::Rear).build();
//! assert_eq!(first.camera(), Some(Camera::Front));
//! assert_eq!(second.camera(), Some(Camera::Rear));
//! ```

use crate::config::field::Field;
use crate::config::merger::{MergeBuilder, Mergeable};
use crate::config::schema::{Adas, Brand, Camera, CarConfiguration, CarId, Engine, Smartphone};
use crate::error::{Error, Result};

/// Mutable staging object for a [`CarConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarConfigurationBuilder {
    id: CarId,
    brand: Brand,
    engine: Engine,
    camera: Option<Camera>,
    smartphone: Option<Smartphone>,
    adas: Option<Adas>,
}

impl CarConfigurationBuilder {
    /// Creates a builder from already validated mandatory fields.
    ///
    /// All optional fields start absent.
    #[must_use]
    pub fn new(id: CarId, brand: Brand, engine: Engine) -> Self {
        Self {
            id,
            brand,
            engine,
            camera: None,
            smartphone: None,
            adas: None,
        }
    }

    /// Creates a builder from raw mandatory field values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `id` is 0 or `brand` is
    /// empty, too long, or contains control characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::{CarConfigurationBuilder, Engine};
    ///
    /// assert!(CarConfigurationBuilder::create(123, "Audi", Engine::Diesel).is_ok());
    /// assert!(CarConfigurationBuilder::create(0, "Audi", Engine::Diesel).is_err());
    /// assert!(CarConfigurationBuilder::create(1, "", Engine::Diesel).is_err());
    /// ```
    pub fn create(id: u32, brand: &str, engine: Engine) -> Result<Self> {
        let id = CarId::try_from(id)?;
        let brand = Brand::try_from(brand)?;
        log::debug!("creating configuration builder for car {id} ({brand}, {engine})");
        Ok(Self::new(id, brand, engine))
    }

    /// Creates a builder holding a copy of every field of `config`.
    #[must_use]
    pub fn from_existing(config: &CarConfiguration) -> Self {
        log::debug!("copying configuration of car {} into builder", config.id);
        Self {
            id: config.id,
            brand: config.brand.clone(),
            engine: config.engine,
            camera: config.camera,
            smartphone: config.smartphone,
            adas: config.adas,
        }
    }

    /// Sets the car identifier.
    pub fn id(&mut self, id: CarId) -> &mut Self {
        self.id = id;
        self
    }

    /// Sets the brand.
    pub fn brand(&mut self, brand: Brand) -> &mut Self {
        self.brand = brand;
        self
    }

    /// Sets the engine type.
    pub fn engine(&mut self, engine: Engine) -> &mut Self {
        self.engine = engine;
        self
    }

    /// Sets the camera option.
    pub fn camera(&mut self, camera: Camera) -> &mut Self {
        self.camera = Some(camera);
        self
    }

    /// Sets the smartphone integration.
    pub fn smartphone(&mut self, smartphone: Smartphone) -> &mut Self {
        self.smartphone = Some(smartphone);
        self
    }

    /// Sets the driver assistance option.
    pub fn adas(&mut self, adas: Adas) -> &mut Self {
        self.adas = Some(adas);
        self
    }

    /// Marks the camera option as absent.
    pub fn clear_camera(&mut self) -> &mut Self {
        self.camera = None;
        self
    }

    /// Marks the smartphone integration as absent.
    pub fn clear_smartphone(&mut self) -> &mut Self {
        self.smartphone = None;
        self
    }

    /// Marks the driver assistance option as absent.
    pub fn clear_adas(&mut self) -> &mut Self {
        self.adas = None;
        self
    }

    /// Runs `configure` against the builder, for inline configuration blocks.
    pub fn configure<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        configure(self);
        self
    }

    /// Applies `update` on top of the current state.
    ///
    /// Mandatory fields are always taken from `update`. Optional fields are
    /// taken from `update` only when present there; absent ones leave the
    /// builder's current value untouched.
    pub fn merge_update(&mut self, update: &CarConfiguration) -> &mut Self {
        log::debug!("merging update for car {} onto car {}", update.id, self.id);

        self.id = update.id;
        self.brand.clone_from(&update.brand);
        self.engine = update.engine;

        if let Some(camera) = update.camera {
            log::trace!("camera: {:?} -> {camera}", self.camera);
            self.camera = Some(camera);
        }
        if let Some(smartphone) = update.smartphone {
            log::trace!("smartphone: {:?} -> {smartphone}", self.smartphone);
            self.smartphone = Some(smartphone);
        }
        if let Some(adas) = update.adas {
            log::trace!("adas: {:?} -> {adas}", self.adas);
            self.adas = Some(adas);
        }

        self
    }

    /// Overwrites the field called `name` with `value` parsed into its type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `name` is not a field and
    /// [`Error::InvalidConfiguration`] if `value` cannot be parsed or violates
    /// the field's constraint. The builder is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::{Camera, CarConfigurationBuilder, Engine};
    ///
    /// let mut builder = CarConfigurationBuilder::create(1, "VW", Engine::Petrol).unwrap();
    /// builder.set_field("camera", "rear").unwrap();
    /// assert_eq!(builder.build().camera(), Some(Camera::Rear));
    ///
    /// assert!(builder.set_field("wheels", "4").unwrap_err().is_unknown_field());
    /// assert!(builder.set_field("id", "0").unwrap_err().is_invalid_configuration());
    /// ```
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        let field: Field = name.parse()?;
        log::trace!("setting {field} = {value:?}");
        match field {
            Field::Id => self.id = value.parse()?,
            Field::Brand => self.brand = value.parse()?,
            Field::Engine => self.engine = value.parse()?,
            Field::Camera => self.camera = Some(value.parse()?),
            Field::Smartphone => self.smartphone = Some(value.parse()?),
            Field::Adas => self.adas = Some(value.parse()?),
        }
        Ok(self)
    }

    /// Marks the optional field called `name` as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `name` is not a field and
    /// [`Error::InvalidConfiguration`] if the field is mandatory.
    pub fn unset_field(&mut self, name: &str) -> Result<&mut Self> {
        let field: Field = name.parse()?;
        match field {
            Field::Id | Field::Brand | Field::Engine => {
                return Err(Error::invalid(
                    field.name(),
                    "mandatory field cannot be unset",
                ));
            }
            Field::Camera => self.camera = None,
            Field::Smartphone => self.smartphone = None,
            Field::Adas => self.adas = None,
        }
        log::trace!("unset {field}");
        Ok(self)
    }

    /// Materializes an immutable snapshot of the current field values.
    #[must_use]
    pub fn build(&self) -> CarConfiguration {
        CarConfiguration {
            id: self.id,
            brand: self.brand.clone(),
            engine: self.engine,
            camera: self.camera,
            smartphone: self.smartphone,
            adas: self.adas,
        }
    }
}

impl From<&CarConfiguration> for CarConfigurationBuilder {
    fn from(config: &CarConfiguration) -> Self {
        Self::from_existing(config)
    }
}

impl MergeBuilder for CarConfigurationBuilder {
    type Output = CarConfiguration;

    fn merge_update(&mut self, update: &CarConfiguration) -> &mut Self {
        Self::merge_update(self, update)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        Self::set_field(self, name, value)
    }

    fn unset_field(&mut self, name: &str) -> Result<&mut Self> {
        Self::unset_field(self, name)
    }

    fn build(&self) -> CarConfiguration {
        Self::build(self)
    }
}

impl Mergeable for CarConfiguration {
    type Builder = CarConfigurationBuilder;

    fn to_builder(&self) -> CarConfigurationBuilder {
        CarConfigurationBuilder::from_existing(self)
    }
}

impl CarConfiguration {
    /// Creates a builder from raw mandatory field values.
    ///
    /// # Errors
    ///
    /// See [`CarConfigurationBuilder::create`].
    pub fn builder(id: u32, brand: &str, engine: Engine) -> Result<CarConfigurationBuilder> {
        CarConfigurationBuilder::create(id, brand, engine)
    }

    /// Creates a configuration from mandatory fields and an inline
    /// configuration block.
    ///
    /// # Errors
    ///
    /// See [`CarConfigurationBuilder::create`].
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::{Camera, CarConfiguration, Engine, Smartphone};
    ///
    /// let car = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
    ///     b.camera(Camera::Front).smartphone(Smartphone::CarPlay);
    /// })
    /// .unwrap();
    /// assert_eq!(car.smartphone(), Some(Smartphone::CarPlay));
    /// ```
    pub fn build_with<F>(id: u32, brand: &str, engine: Engine, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut CarConfigurationBuilder),
    {
        Ok(CarConfigurationBuilder::create(id, brand, engine)?
            .configure(configure)
            .build())
    }

    /// Returns a copy of this configuration with an inline configuration
    /// block applied.
    #[must_use]
    pub fn rebuild<F>(&self, configure: F) -> Self
    where
        F: FnOnce(&mut CarConfigurationBuilder),
    {
        CarConfigurationBuilder::from_existing(self)
            .configure(configure)
            .build()
    }

    /// Applies `update` to this configuration in place, with the same
    /// semantics as [`crate::merge`].
    pub fn update(&mut self, update: &Self) {
        *self = CarConfigurationBuilder::from_existing(self)
            .merge_update(update)
            .build();
    }
}
