//! Tests for the placeholder generator

use crate::config::{ConstraintsUpdate, DimensionConstraints};
use crate::error::{ErrorKind, PlaceholderError};
use crate::generator::PlaceholderGenerator;
use crate::provider::Provider;
use crate::request::{
    Dimensions, PicsumOptions, PlaceholdOptions, PlaceholderRequest, ProviderOptions,
};
use assert_matches::assert_matches;
use serde_json::json;
use std::collections::BTreeSet;

#[test]
fn test_square_default() {
    let result = PlaceholderGenerator::default()
        .generate_placeholder(&PlaceholderRequest::new("placehold", 300))
        .unwrap();

    assert_eq!(result.url, "https://placehold.co/300");
    assert_eq!(result.provider, Provider::Placehold);
    assert_eq!(result.dimensions, Dimensions { width: 300, height: 300 });
    assert_eq!(result.applied_options, None);
}

#[test]
fn test_base_cases() {
    let generator = PlaceholderGenerator::default();

    let result = generator
        .generate_placeholder(&PlaceholderRequest::new("placehold", 300).with_height(200))
        .unwrap();
    assert_eq!(result.url, "https://placehold.co/300x200");
    assert_eq!(result.dimensions, Dimensions { width: 300, height: 200 });

    let result = generator
        .generate_placeholder(&PlaceholderRequest::new("lorem-picsum", 400).with_height(300))
        .unwrap();
    assert_eq!(result.url, "https://picsum.photos/400/300");
    assert_eq!(result.provider, Provider::LoremPicsum);
}

#[test]
fn test_applied_options_echo() {
    let options = PicsumOptions {
        grayscale: Some(true),
        ..PicsumOptions::default()
    };
    let request = PlaceholderRequest::new("lorem-picsum", 400).with_picsum_options(options.clone());

    let result = PlaceholderGenerator::default()
        .generate_placeholder(&request)
        .unwrap();

    assert_eq!(result.url, "https://picsum.photos/400?grayscale");
    assert_eq!(result.applied_options, Some(ProviderOptions::Picsum(options)));
}

#[test]
fn test_result_serialization() {
    let options = PlaceholdOptions {
        format: Some("png".to_string()),
        ..PlaceholdOptions::default()
    };
    let request = PlaceholderRequest::new("placehold", 640)
        .with_height(480)
        .with_placehold_options(options);

    let result = PlaceholderGenerator::default()
        .generate_placeholder(&request)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        json!({
            "url": "https://placehold.co/640x480.png",
            "provider": "placehold",
            "dimensions": { "width": 640, "height": 480 },
            "appliedOptions": { "format": "png" }
        })
    );
}

#[test]
fn test_validator_errors_propagate_unchanged() {
    let generator = PlaceholderGenerator::default();

    let err = generator
        .generate_placeholder(&PlaceholderRequest::new("placehold", 0))
        .unwrap_err();
    let direct = generator
        .validator()
        .validate(&PlaceholderRequest::new("placehold", 0))
        .unwrap_err();
    assert_eq!(err, direct);

    let err = generator
        .generate_placeholder(&PlaceholderRequest::new("unsplash", 100))
        .unwrap_err();
    assert_matches!(err, PlaceholderError::ProviderUnsupported { .. });
}

#[test]
fn test_builder_bounds_apply_after_validation() {
    // Passes the 1..=10000 validator but not the 10..=4000 builder bound
    let err = PlaceholderGenerator::default()
        .generate_placeholder(&PlaceholderRequest::new("placehold", 5000))
        .unwrap_err();

    assert_eq!(err.field(), Some("width"));
    assert_eq!(err.context()["constraint"], "must be between 10 and 4000");
}

#[test]
fn test_builder_bounds_apply_even_with_relaxed_constraints() {
    let mut generator = PlaceholderGenerator::new(DimensionConstraints::default());
    generator.update_constraints(ConstraintsUpdate {
        max_width: Some(50_000),
        ..ConstraintsUpdate::default()
    });

    assert!(
        generator
            .generate_placeholder(&PlaceholderRequest::new("lorem-picsum", 20_000))
            .is_err()
    );
}

#[test]
fn test_cross_provider_options_rejected() {
    let request = PlaceholderRequest::new("placehold", 300).with_picsum_options(PicsumOptions {
        grayscale: Some(true),
        ..PicsumOptions::default()
    });

    let err = PlaceholderGenerator::default()
        .generate_placeholder(&request)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("picsumOptions"));
}

#[test]
fn test_allow_listed_provider_without_builder() {
    let mut providers: BTreeSet<String> = DimensionConstraints::default().supported_providers;
    providers.insert("dummyimage".to_string());

    let mut generator = PlaceholderGenerator::default();
    generator.update_constraints(ConstraintsUpdate {
        supported_providers: Some(providers),
        ..ConstraintsUpdate::default()
    });

    let err = generator
        .generate_placeholder(&PlaceholderRequest::new("dummyimage", 300))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProviderUnsupported);
    assert_eq!(
        err.context()["supportedProviders"],
        json!(["placehold", "lorem-picsum"])
    );
}

#[test]
fn test_generate_from_value() {
    let result = PlaceholderGenerator::default()
        .generate_from_value(&json!({
            "provider": "lorem-picsum",
            "width": 400,
            "height": 300,
            "picsumOptions": { "imageId": 237, "blur": 2 }
        }))
        .unwrap();

    assert_eq!(result.url, "https://picsum.photos/id/237/400/300?blur=2");
    assert_eq!(
        serde_json::to_value(&result.applied_options).unwrap(),
        json!({ "imageId": 237, "blur": 2 })
    );
}

#[test]
fn test_generate_from_value_whole_float_image_id() {
    let result = PlaceholderGenerator::default()
        .generate_from_value(&json!({
            "provider": "lorem-picsum",
            "width": 300,
            "height": 200,
            "picsumOptions": { "imageId": 237.0 }
        }))
        .unwrap();

    assert_eq!(result.url, "https://picsum.photos/id/237/300/200");
}

#[test]
fn test_generate_from_value_errors() {
    let generator = PlaceholderGenerator::default();

    let err = generator.generate_from_value(&json!(null)).unwrap_err();
    assert_eq!(err.field(), Some("request"));

    let err = generator
        .generate_from_value(&json!({
            "provider": "lorem-picsum",
            "width": 400,
            "picsumOptions": { "imageId": 237, "seed": "x" }
        }))
        .unwrap_err();
    assert_eq!(err.field(), Some("imageId"));
}

#[test]
fn test_legacy_url() {
    let generator = PlaceholderGenerator::default();

    assert_eq!(
        generator.generate_legacy_url("placehold", 300, 200).unwrap(),
        "https://placehold.co/300x200"
    );
    assert_eq!(
        generator.generate_legacy_url("lorem-picsum", 400, 400).unwrap(),
        "https://picsum.photos/400/400"
    );
}

#[test]
fn test_legacy_url_validates() {
    let generator = PlaceholderGenerator::default();

    let err = generator.generate_legacy_url("placehold", 0, 200).unwrap_err();
    assert_eq!(err.field(), Some("width"));

    let err = generator.generate_legacy_url("unsplash", 100, 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProviderUnsupported);
}

#[test]
fn test_generation_is_deterministic() {
    let generator = PlaceholderGenerator::default();
    let request = PlaceholderRequest::new("placehold", 1200)
        .with_height(630)
        .with_placehold_options(PlaceholdOptions {
            custom_text: Some("Same every time".to_string()),
            ..PlaceholdOptions::default()
        });

    let first = generator.generate_placeholder(&request).unwrap();
    let second = generator.generate_placeholder(&request).unwrap();
    assert_eq!(first, second);
}
