use super::*;

#[test]
fn null_params_take_defaults() {
    let config = parse_flip_params("flip", &serde_json::Value::Null).unwrap();
    assert_eq!(config, FlipConfig::default());
}

#[test]
fn kind_is_trimmed_and_case_insensitive() {
    assert!(parse_flip_params(" Flip ", &serde_json::Value::Null).is_ok());
}

#[test]
fn unknown_or_empty_kind_is_rejected() {
    let err = parse_flip_params("wipe", &serde_json::Value::Null).unwrap_err();
    assert!(err.to_string().contains("unknown transition kind"));
    let err = parse_flip_params("  ", &serde_json::Value::Null).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn params_must_be_an_object() {
    let err = parse_flip_params("flip", &serde_json::json!([1, 2])).unwrap_err();
    assert!(err.to_string().contains("must be an object"));
}

#[test]
fn overrides_are_applied() {
    let config = parse_flip_params(
        "flip",
        &serde_json::json!({
            "duration": 1.0,
            "flipped": true,
            "background": [128, 0, 255],
        }),
    )
    .unwrap();
    assert_eq!(config.duration, 1.0);
    assert!(config.flipped);
    assert_eq!(config.background, Rgba8::from_rgb8(128, 0, 255));
}

#[test]
fn bad_duration_is_rejected() {
    for value in [serde_json::json!(0.0), serde_json::json!(-2.0)] {
        let err = parse_flip_params("flip", &serde_json::json!({ "duration": value })).unwrap_err();
        assert!(err.to_string().contains("flip.duration"));
    }
}

#[test]
fn bad_flipped_is_rejected() {
    let err = parse_flip_params("flip", &serde_json::json!({ "flipped": "yes" })).unwrap_err();
    assert!(err.to_string().contains("flip.flipped"));
}

#[test]
fn bad_background_is_rejected() {
    for value in [
        serde_json::json!("black"),
        serde_json::json!([1, 2]),
        serde_json::json!([1, 2, 3, 4]),
        serde_json::json!([1, 2, 300]),
        serde_json::json!([1, 2, -1]),
    ] {
        let err =
            parse_flip_params("flip", &serde_json::json!({ "background": value })).unwrap_err();
        assert!(err.to_string().contains("flip.background"), "{value}");
    }
}
