//! Right-biased merging of configurations.
//!
//! A merge copies the base into a builder, applies the update on top of it
//! and builds the result. Mandatory fields always take the update's value;
//! optional fields take the update's value only when it is present.

use crate::error::Result;

/// A staging object that accumulates changes to a configuration.
///
/// Implemented by every builder in this crate so that merging can be
/// expressed once for all configuration types.
pub trait MergeBuilder {
    /// The configuration this builder produces.
    type Output;

    /// Applies `update` on top of the current state.
    ///
    /// Mandatory fields are overwritten unconditionally. Optional fields are
    /// overwritten only when present in `update`.
    fn merge_update(&mut self, update: &Self::Output) -> &mut Self;

    /// Overwrites one field, parsing `value` into the field's type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownField`] for names outside the schema and
    /// [`crate::Error::InvalidConfiguration`] when `value` is rejected. The
    /// builder is left unchanged on error.
    fn set_field(&mut self, name: &str, value: &str) -> Result<&mut Self>;

    /// Marks an optional field as absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownField`] for names outside the schema and
    /// [`crate::Error::InvalidConfiguration`] for mandatory fields.
    fn unset_field(&mut self, name: &str) -> Result<&mut Self>;

    /// Materializes an independent snapshot of the current state.
    fn build(&self) -> Self::Output;
}

/// A configuration that can be copied into a builder.
pub trait Mergeable: Sized {
    /// The builder staging this configuration.
    type Builder: MergeBuilder<Output = Self>;

    /// Creates a builder holding a copy of every field of `self`.
    fn to_builder(&self) -> Self::Builder;
}

/// Merges `update` onto `base`.
///
/// Equivalent to copying `base` into a builder, applying
/// [`MergeBuilder::merge_update`] with `update`, and building.
///
/// # Examples
///
/// ```
/// use carconf::{merge, Adas, Camera, CarConfiguration, Engine, Smartphone};
///
/// let base = CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
///     b.camera(Camera::Front).smartphone(Smartphone::CarPlay);
/// })
/// .unwrap();
/// let update = base.rebuild(|b| {
///     b.clear_camera().clear_smartphone().adas(Adas::AdaptiveControl);
/// });
///
/// let merged = merge(&base, &update);
/// assert_eq!(merged.camera(), Some(Camera::Front));
/// assert_eq!(merged.smartphone(), Some(Smartphone::CarPlay));
/// assert_eq!(merged.adas(), Some(Adas::AdaptiveControl));
/// ```
#[must_use]
pub fn merge<C: Mergeable>(base: &C, update: &C) -> C {
    base.to_builder().merge_update(update).build()
}

/// Merges each update onto `base` in order (lowest to highest precedence).
///
/// Returns a copy of `base` when `updates` is empty.
#[must_use]
pub fn merge_all<'a, C, I>(base: &C, updates: I) -> C
where
    C: Mergeable + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut builder = base.to_builder();
    let mut applied = 0usize;
    for update in updates {
        builder.merge_update(update);
        applied += 1;
    }
    log::debug!("merged {applied} update(s) onto base configuration");
    builder.build()
}
