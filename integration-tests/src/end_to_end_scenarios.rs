//! End-to-end scenarios through the server's tool entry point

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use assert_matches::assert_matches;
    use image_placeholder_core::{
        DimensionConstraints, ErrorKind, PlaceholderGenerator, PlaceholderError,
    };
    use image_placeholder_server::{PlaceholderServer, ServerConfig, ServerError};
    use serde_json::json;
    use std::collections::HashMap;

    fn server() -> PlaceholderServer {
        PlaceholderServer::default()
    }

    #[test]
    fn test_social_card_scenario() {
        let url = call_url(
            &server(),
            json!({
                "provider": "placehold",
                "width": 1200,
                "height": 630,
                "placeholdOptions": {
                    "format": "png",
                    "backgroundColor": "#f9fafb",
                    "textColor": "#2563eb",
                    "customText": "DeepakNess",
                    "font": "playfair-display",
                    "retina": "2x"
                }
            }),
        )
        .unwrap();

        assert_eq!(
            url,
            "https://placehold.co/1200x630@2x/f9fafb/2563eb.png?text=DeepakNess&font=playfair+display"
        );
    }

    #[test]
    fn test_picsum_gallery_scenario() {
        let server = server();

        let by_id = call_url(
            &server,
            json!({
                "provider": "lorem-picsum",
                "width": 600,
                "height": 400,
                "picsumOptions": { "imageId": 237, "format": "webp", "blur": 2 }
            }),
        )
        .unwrap();
        assert_eq!(by_id, "https://picsum.photos/id/237/600/400.webp?blur=2");

        let random = call_url(
            &server,
            json!({
                "provider": "lorem-picsum",
                "width": 200,
                "height": 200,
                "picsumOptions": { "grayscale": true, "blur": 1, "random": 3 }
            }),
        )
        .unwrap();
        assert_eq!(random, "https://picsum.photos/200?grayscale&blur&random=3");
    }

    #[test]
    fn test_same_input_same_url() {
        let server = server();
        let args = json!({
            "provider": "lorem-picsum",
            "width": 640,
            "height": 480,
            "picsumOptions": { "seed": "stable seed" }
        });

        let first = call_url(&server, args.clone()).unwrap();
        let second = call_url(&server, args).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "https://picsum.photos/seed/stable%20seed/640/480");
    }

    #[test]
    fn test_rejections_carry_field() {
        let server = server();

        let cases = [
            (
                json!({ "provider": "placehold", "width": 300, "placeholdOptions": { "retina": "2x" } }),
                "retina",
            ),
            (
                json!({ "provider": "lorem-picsum", "width": 300, "picsumOptions": { "imageId": 1, "seed": "x" } }),
                "imageId",
            ),
            (
                json!({ "provider": "lorem-picsum", "width": 300, "picsumOptions": { "blur": 11 } }),
                "blur",
            ),
            (json!({ "provider": "placehold", "width": 12.5 }), "width"),
            (json!({ "provider": "placehold" }), "width"),
        ];

        for (args, field) in cases {
            let err = server.call(tool_arguments(args.clone())).unwrap_err();
            assert_matches!(
                &err,
                ServerError::Placeholder(e) if e.field() == Some(field),
                "{args}"
            );
        }
    }

    #[test]
    fn test_builder_bounds_apply_inside_validator_range() {
        // 5 passes the default 1..=10000 range but not the builder's 10..=4000
        let err = server()
            .call(tool_arguments(json!({ "provider": "placehold", "width": 5, "height": 5 })))
            .unwrap_err();

        assert_matches!(err, ServerError::Placeholder(e) if e.kind() == ErrorKind::Validation);
    }

    #[test]
    fn test_environment_constraints_flow_into_server() {
        let vars = HashMap::from([("PLACEHOLDER_MAX_WIDTH", "800"), ("PLACEHOLDER_MIN_HEIGHT", "50")]);
        let constraints =
            DimensionConstraints::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        let config = ServerConfig {
            constraints,
            ..Default::default()
        };
        let server = PlaceholderServer::from_config(&config);

        assert!(call_url(&server, json!({ "provider": "placehold", "width": 800, "height": 50 })).is_ok());
        assert!(call_url(&server, json!({ "provider": "placehold", "width": 801, "height": 50 })).is_err());
        assert!(call_url(&server, json!({ "provider": "placehold", "width": 100, "height": 49 })).is_err());
    }

    #[test]
    fn test_invalid_environment_override() {
        let err = DimensionConstraints::from_lookup(|key| {
            (key == "PLACEHOLDER_MIN_WIDTH").then(|| "wide".to_string())
        })
        .unwrap_err();

        assert_matches!(err, PlaceholderError::Configuration { .. });
    }

    #[test]
    fn test_legacy_entry_point() {
        let generator = PlaceholderGenerator::default();

        assert_eq!(
            generator.generate_legacy_url("placehold", 300, 200).unwrap(),
            "https://placehold.co/300x200"
        );
        assert_eq!(
            generator.generate_legacy_url("lorem-picsum", 300, 200).unwrap(),
            "https://picsum.photos/300/200"
        );
        assert_matches!(
            generator.generate_legacy_url("unsplash", 300, 200),
            Err(PlaceholderError::ProviderUnsupported { .. })
        );
    }
}
