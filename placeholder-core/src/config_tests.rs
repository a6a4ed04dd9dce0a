//! Tests for dimension constraints and environment overrides

use crate::config::*;
use crate::error::ErrorKind;
use std::collections::{BTreeSet, HashMap};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_constraints() {
    let constraints = DimensionConstraints::default();

    assert_eq!(constraints.min_width, 1);
    assert_eq!(constraints.max_width, 10_000);
    assert_eq!(constraints.min_height, 1);
    assert_eq!(constraints.max_height, 10_000);
    assert!(constraints.supports("placehold"));
    assert!(constraints.supports("lorem-picsum"));
    assert_eq!(constraints.supported_providers.len(), 2);
    assert!(constraints.check().is_ok());
}

#[test]
fn test_from_lookup_without_overrides_uses_defaults() {
    let constraints = DimensionConstraints::from_lookup(|_| None).unwrap();
    assert_eq!(constraints, DimensionConstraints::default());
}

#[test]
fn test_from_lookup_applies_overrides() {
    let lookup = lookup_from(&[
        (ENV_MIN_WIDTH, "50"),
        (ENV_MAX_WIDTH, "2000"),
        (ENV_MIN_HEIGHT, " 20 "),
        (ENV_MAX_HEIGHT, "1500"),
    ]);
    let constraints = DimensionConstraints::from_lookup(lookup).unwrap();

    assert_eq!(constraints.min_width, 50);
    assert_eq!(constraints.max_width, 2000);
    assert_eq!(constraints.min_height, 20);
    assert_eq!(constraints.max_height, 1500);
}

#[test]
fn test_from_lookup_ignores_empty_values() {
    let lookup = lookup_from(&[(ENV_MAX_WIDTH, "")]);
    let constraints = DimensionConstraints::from_lookup(lookup).unwrap();
    assert_eq!(constraints.max_width, DEFAULT_MAX_DIMENSION);
}

#[test]
fn test_from_lookup_rejects_non_numeric() {
    let lookup = lookup_from(&[(ENV_MAX_WIDTH, "wide")]);
    let err = DimensionConstraints::from_lookup(lookup).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.context()["key"], ENV_MAX_WIDTH);
    assert!(err.message().contains("wide"));
}

#[test]
fn test_from_lookup_rejects_negative_and_zero() {
    let err = DimensionConstraints::from_lookup(lookup_from(&[(ENV_MIN_HEIGHT, "-5")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = DimensionConstraints::from_lookup(lookup_from(&[(ENV_MIN_WIDTH, "0")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.context()["key"], ENV_MIN_WIDTH);
}

#[test]
fn test_from_lookup_rejects_inverted_bounds() {
    let lookup = lookup_from(&[(ENV_MIN_WIDTH, "500"), (ENV_MAX_WIDTH, "100")]);
    let err = DimensionConstraints::from_lookup(lookup).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.message().contains("minWidth (500)"));

    let lookup = lookup_from(&[(ENV_MAX_HEIGHT, "0")]);
    assert!(DimensionConstraints::from_lookup(lookup).is_err());
}

#[test]
fn test_check_rejects_empty_providers() {
    let constraints = DimensionConstraints {
        supported_providers: BTreeSet::new(),
        ..DimensionConstraints::default()
    };

    let err = constraints.check().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_apply_merges_only_given_fields() {
    let mut constraints = DimensionConstraints::default();
    constraints.apply(ConstraintsUpdate {
        max_width: Some(800),
        ..ConstraintsUpdate::default()
    });

    assert_eq!(constraints.max_width, 800);
    assert_eq!(constraints.min_width, DEFAULT_MIN_DIMENSION);
    assert_eq!(constraints.max_height, DEFAULT_MAX_DIMENSION);
    assert_eq!(constraints.supported_providers.len(), 2);
}

#[test]
fn test_constraints_serialization_uses_camel_case() {
    let json = serde_json::to_value(DimensionConstraints::default()).unwrap();

    assert_eq!(json["minWidth"], 1);
    assert_eq!(json["maxHeight"], 10_000);
    assert_eq!(
        json["supportedProviders"],
        serde_json::json!(["lorem-picsum", "placehold"])
    );
}
