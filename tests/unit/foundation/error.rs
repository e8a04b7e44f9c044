use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlacementError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PlacementError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        PlacementError::malformed_pictograph("x")
            .to_string()
            .contains("malformed pictograph:")
    );
    assert!(
        PlacementError::missing_placement_data("x")
            .to_string()
            .contains("missing placement data:")
    );
}

#[test]
fn missing_location_pair_names_both_ends() {
    let err = PlacementError::missing_location_pair(Location::North, Location::SouthEast);
    assert_eq!(err.to_string(), "missing location pair: n -> se");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlacementError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
