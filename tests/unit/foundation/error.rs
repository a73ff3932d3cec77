use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlipError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FlipError::timing("x").to_string().contains("timing error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlipError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
