use super::*;
use crate::domain::model::{MotionColor, MotionType, Orientation, RotationDirection, Turns};

fn motion(motion_type: MotionType, start: Location, end: Location) -> MotionData {
    MotionData {
        motion_type,
        rotation_direction: RotationDirection::Clockwise,
        start_location: start,
        end_location: end,
        start_orientation: Orientation::In,
        end_orientation: Orientation::In,
        turns: Turns::Count(0.0),
        color: MotionColor::Blue,
    }
}

#[test]
fn diamond_shift_uses_intercardinal_map() {
    let m = motion(MotionType::Pro, Location::North, Location::East);
    assert_eq!(quadrant_index(&m, Location::NorthEast), 0);
    assert_eq!(quadrant_index(&m, Location::SouthEast), 1);
    assert_eq!(quadrant_index(&m, Location::SouthWest), 2);
    assert_eq!(quadrant_index(&m, Location::NorthWest), 3);
}

#[test]
fn diamond_static_uses_cardinal_map() {
    let m = motion(MotionType::Static, Location::West, Location::West);
    assert_eq!(quadrant_index(&m, Location::North), 0);
    assert_eq!(quadrant_index(&m, Location::West), 3);
}

#[test]
fn box_maps_are_swapped() {
    let shift = motion(MotionType::Anti, Location::NorthEast, Location::SouthEast);
    assert_eq!(quadrant_index(&shift, Location::East), 1);
    assert_eq!(quadrant_index(&shift, Location::South), 2);

    let dash = motion(MotionType::Dash, Location::NorthEast, Location::SouthWest);
    assert_eq!(quadrant_index(&dash, Location::SouthEast), 1);
    assert_eq!(quadrant_index(&dash, Location::NorthWest), 3);
}

#[test]
fn unmapped_location_falls_back_to_zero() {
    let m = motion(MotionType::Pro, Location::North, Location::East);
    assert_eq!(quadrant_index(&m, Location::South), 0);
}
