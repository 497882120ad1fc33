use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LenticularError::insufficient_sources("x")
            .to_string()
            .contains("insufficient sources:")
    );
    assert!(
        LenticularError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        LenticularError::empty_geometry("x")
            .to_string()
            .contains("empty geometry:")
    );
    assert!(
        LenticularError::decode("x")
            .to_string()
            .contains("decode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LenticularError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
