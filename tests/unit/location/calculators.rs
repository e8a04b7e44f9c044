use super::*;
use crate::domain::model::{MotionColor, Orientation, RotationDirection, Turns};

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

fn dash(start: Location, end: Location, turns: f64, dir: RotationDirection) -> MotionData {
    MotionData {
        rotation_direction: dir,
        turns: Turns::Count(turns),
        ..motion(MotionType::Dash, start, end)
    }
}

#[test]
fn shift_cardinal_pairs_map_to_intercardinals_in_both_orders() {
    use Location as L;
    let cases = [
        (L::North, L::East, L::NorthEast),
        (L::East, L::South, L::SouthEast),
        (L::South, L::West, L::SouthWest),
        (L::West, L::North, L::NorthWest),
    ];
    for (a, b, want) in cases {
        for mt in [MotionType::Pro, MotionType::Anti, MotionType::Float] {
            assert_eq!(ShiftLocationCalculator.calculate(&motion(mt, a, b)), want);
            assert_eq!(ShiftLocationCalculator.calculate(&motion(mt, b, a)), want);
        }
    }
}

#[test]
fn shift_box_pairs_map_to_cardinals() {
    use Location as L;
    assert_eq!(
        ShiftLocationCalculator::midpoint(L::NorthEast, L::SouthEast),
        Some(L::East)
    );
    assert_eq!(
        ShiftLocationCalculator::midpoint(L::NorthEast, L::NorthWest),
        Some(L::North)
    );
    assert_eq!(
        ShiftLocationCalculator::midpoint(L::SouthWest, L::SouthEast),
        Some(L::South)
    );
}

#[test]
fn shift_unknown_pair_defaults_to_north() {
    let m = motion(MotionType::Pro, Location::North, Location::South);
    assert_eq!(ShiftLocationCalculator.calculate(&m), Location::North);
    let m = motion(MotionType::Anti, Location::East, Location::East);
    assert_eq!(ShiftLocationCalculator.calculate(&m), Location::North);
}

#[test]
fn static_keeps_start() {
    let m = motion(MotionType::Static, Location::SouthWest, Location::SouthWest);
    assert_eq!(StaticLocationCalculator.calculate(&m), Location::SouthWest);
}

#[test]
fn dash_without_turns_uses_default_midpoint() {
    let calc = DashLocationCalculator::new(Letter::Phi);
    let m = dash(Location::North, Location::South, 0.0, RotationDirection::NoRotation);
    assert_eq!(calc.calculate(&m), Location::East);
    let m = dash(Location::East, Location::West, 0.0, RotationDirection::NoRotation);
    assert_eq!(calc.calculate(&m), Location::South);
}

#[test]
fn dash_lambda_families_invert_the_midpoint() {
    let m = dash(Location::North, Location::South, 0.0, RotationDirection::NoRotation);
    assert_eq!(
        DashLocationCalculator::new(Letter::Lambda).calculate(&m),
        Location::West
    );
    assert_eq!(
        DashLocationCalculator::new(Letter::LambdaDash).calculate(&m),
        Location::West
    );
    assert_eq!(
        DashLocationCalculator::with_flags(Letter::Phi, true, false).calculate(&m),
        Location::West
    );
}

#[test]
fn dash_with_turns_follows_rotation_direction() {
    let calc = DashLocationCalculator::new(Letter::Phi);
    let m = dash(Location::North, Location::South, 1.0, RotationDirection::Clockwise);
    assert_eq!(calc.calculate(&m), Location::East);
    let m = dash(
        Location::North,
        Location::South,
        1.0,
        RotationDirection::CounterClockwise,
    );
    assert_eq!(calc.calculate(&m), Location::West);
    // The rotation rule wins over the lambda inversion.
    let m = dash(Location::East, Location::West, 2.0, RotationDirection::Clockwise);
    assert_eq!(
        DashLocationCalculator::new(Letter::Lambda).calculate(&m),
        Location::South
    );
}

#[test]
fn dash_is_total_over_all_pairs() {
    let calc = DashLocationCalculator::new(Letter::PsiDash);
    for start in Location::ALL {
        for end in Location::ALL {
            let m = dash(start, end, 0.0, RotationDirection::NoRotation);
            let loc = calc.calculate(&m);
            match start.steps_to(end) {
                0 | 4 => assert_eq!(loc, start.rotated(2)),
                _ => assert_eq!(loc, start),
            }
        }
    }
}

#[test]
fn dispatch_requires_letter_only_for_dash() {
    let m = motion(MotionType::Pro, Location::North, Location::East);
    assert_eq!(arrow_location(&m, None).unwrap(), Location::NorthEast);

    let d = dash(Location::North, Location::South, 0.0, RotationDirection::NoRotation);
    assert!(matches!(
        arrow_location(&d, None),
        Err(PlacementError::MalformedPictograph(_))
    ));
    assert_eq!(arrow_location(&d, Some(Letter::Phi)).unwrap(), Location::East);
}
