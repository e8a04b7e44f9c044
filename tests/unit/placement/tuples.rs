use super::*;
use crate::domain::model::{Location, MotionColor, Orientation, Turns};

fn motion(motion_type: MotionType, dir: RotationDirection, end: Location) -> MotionData {
    MotionData {
        motion_type,
        rotation_direction: dir,
        start_location: Location::North,
        end_location: end,
        start_orientation: Orientation::In,
        end_orientation: Orientation::In,
        turns: Turns::Count(0.0),
        color: MotionColor::Blue,
    }
}

#[test]
fn four_distinct_quarter_turned_variants() {
    let m = motion(MotionType::Pro, RotationDirection::Clockwise, Location::East);
    let t = directional_tuples(Vec2::new(20.0, 5.0), &m);
    assert_eq!(t[0], Vec2::new(20.0, 5.0));
    assert_eq!(t[1], Vec2::new(-5.0, 20.0));
    assert_eq!(t[2], Vec2::new(-20.0, -5.0));
    assert_eq!(t[3], Vec2::new(5.0, -20.0));
    for i in 0..4 {
        for j in (i + 1)..4 {
            assert_ne!(t[i], t[j]);
        }
    }
    assert_eq!(rotate_quarter_turns(t[3], 1), t[0]);
}

#[test]
fn zero_base_stays_zero() {
    let m = motion(MotionType::Anti, RotationDirection::Clockwise, Location::East);
    assert_eq!(directional_tuples(Vec2::ZERO, &m), [Vec2::ZERO; 4]);
}

#[test]
fn handedness_mirrors_the_base() {
    use RotationDirection as R;
    let base = Vec2::new(20.0, 5.0);
    let mirrored = Vec2::new(-5.0, -20.0);
    let cases = [
        (MotionType::Pro, R::Clockwise, Location::East, base),
        (MotionType::Pro, R::CounterClockwise, Location::West, mirrored),
        (MotionType::Anti, R::Clockwise, Location::East, mirrored),
        (MotionType::Anti, R::CounterClockwise, Location::West, base),
        (MotionType::Float, R::NoRotation, Location::East, base),
        (MotionType::Float, R::NoRotation, Location::West, mirrored),
        (MotionType::Static, R::CounterClockwise, Location::North, mirrored),
        (MotionType::Dash, R::Clockwise, Location::South, base),
    ];
    for (mt, dir, end, want) in cases {
        let m = motion(mt, dir, end);
        assert_eq!(directional_tuples(base, &m)[0], want, "{mt} {dir}");
    }
}
