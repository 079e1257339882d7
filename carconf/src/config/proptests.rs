//! Property-based tests for configuration merging.

use super::builder::CarConfigurationBuilder;
use super::merger::{merge, merge_all};
use super::profile::DriverProfile;
use super::schema::{Adas, Brand, Camera, CarConfiguration, CarId, Engine, Smartphone};
use proptest::prelude::*;

fn engine_strategy() -> impl Strategy<Value = Engine> {
    prop::sample::select(Engine::ALL)
}

fn camera_strategy() -> impl Strategy<Value = Option<Camera>> {
    prop::option::of(prop::sample::select(Camera::ALL))
}

fn smartphone_strategy() -> impl Strategy<Value = Option<Smartphone>> {
    prop::option::of(prop::sample::select(Smartphone::ALL))
}

fn adas_strategy() -> impl Strategy<Value = Option<Adas>> {
    prop::option::of(prop::sample::select(Adas::ALL))
}

// Strategy for generating valid configurations
fn config_strategy() -> impl Strategy<Value = CarConfiguration> {
    (
        1u32..=10_000,
        "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]",
        engine_strategy(),
        camera_strategy(),
        smartphone_strategy(),
        adas_strategy(),
    )
        .prop_map(|(id, brand, engine, camera, smartphone, adas)| {
            let mut builder = CarConfigurationBuilder::new(
                CarId::try_from(id).unwrap(),
                Brand::try_from(brand).unwrap(),
                engine,
            );
            if let Some(camera) = camera {
                builder.camera(camera);
            }
            if let Some(smartphone) = smartphone {
                builder.smartphone(smartphone);
            }
            if let Some(adas) = adas {
                builder.adas(adas);
            }
            builder.build()
        })
}

fn profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (prop::option::of(any::<u32>()), prop::option::of("[a-z]{1,12}")).prop_map(|(id, name)| {
        let mut builder = DriverProfile::builder();
        if let Some(id) = id {
            builder.id(id);
        }
        if let Some(name) = name {
            builder.name(name);
        }
        builder.build()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging a configuration with itself changes nothing
    #[test]
    fn merge_is_idempotent(x in config_strategy()) {
        prop_assert_eq!(merge(&x, &x), x);
    }

    // Mandatory fields always come from the update
    #[test]
    fn merge_mandatory_fields_are_right_biased(
        a in config_strategy(),
        b in config_strategy()
    ) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.id(), b.id());
        prop_assert_eq!(merged.brand(), b.brand());
        prop_assert_eq!(merged.engine(), b.engine());
    }

    // Optional fields coalesce: update if present, base otherwise
    #[test]
    fn merge_optional_fields_coalesce(
        a in config_strategy(),
        b in config_strategy()
    ) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.camera(), b.camera().or(a.camera()));
        prop_assert_eq!(merged.smartphone(), b.smartphone().or(a.smartphone()));
        prop_assert_eq!(merged.adas(), b.adas().or(a.adas()));

        if b.camera().is_none() {
            prop_assert_eq!(merged.camera(), a.camera());
        } else {
            prop_assert_eq!(merged.camera(), b.camera());
        }
    }

    // Chained merges are associative
    #[test]
    fn merge_is_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let left = merge(&merge(&a, &b), &c);
        let right = merge(&a, &merge(&b, &c));
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, merge_all(&a, [&b, &c]));
    }

    // An update equal to the base except for absent optionals is transparent
    #[test]
    fn merge_with_stripped_copy_is_identity(x in config_strategy()) {
        let stripped = x.rebuild(|b| {
            b.clear_camera().clear_smartphone().clear_adas();
        });
        prop_assert_eq!(merge(&x, &stripped), x);
    }

    // Mutating a builder never changes configurations it already built
    #[test]
    fn built_snapshots_are_immutable(
        x in config_strategy(),
        update in config_strategy()
    ) {
        let mut builder = CarConfigurationBuilder::from_existing(&x);
        let snapshot = builder.build();

        builder.merge_update(&update).clear_camera();
        builder.set_field("brand", "Mutated").unwrap();

        prop_assert_eq!(snapshot, x);
    }

    // In-place update agrees with merge
    #[test]
    fn update_in_place_matches_merge(
        a in config_strategy(),
        b in config_strategy()
    ) {
        let mut in_place = a.clone();
        in_place.update(&b);
        prop_assert_eq!(in_place, merge(&a, &b));
    }

    // Documents round-trip through YAML
    #[test]
    fn yaml_round_trip_preserves_presence(x in config_strategy()) {
        let yaml = serde_yaml::to_string(&x).unwrap();
        let back: CarConfiguration = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, x);
    }

    // The empty profile is a two-sided identity for profile merges
    #[test]
    fn profile_empty_is_identity(p in profile_strategy()) {
        let empty = DriverProfile::default();
        prop_assert_eq!(merge(&p, &empty), p.clone());
        prop_assert_eq!(merge(&empty, &p), p);
    }

    // Profile merges are associative
    #[test]
    fn profile_merge_is_associative(
        a in profile_strategy(),
        b in profile_strategy(),
        c in profile_strategy()
    ) {
        prop_assert_eq!(merge(&merge(&a, &b), &c), merge(&a, &merge(&b, &c)));
    }
}
