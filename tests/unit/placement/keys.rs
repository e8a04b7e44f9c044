use super::*;
use crate::domain::model::{Location, MotionColor, RotationDirection, Turns};

fn motion(
    color: MotionColor,
    motion_type: MotionType,
    dir: RotationDirection,
    turns: Turns,
) -> MotionData {
    MotionData {
        motion_type,
        rotation_direction: dir,
        start_location: Location::North,
        end_location: Location::East,
        start_orientation: Orientation::In,
        end_orientation: Orientation::In,
        turns,
        color,
    }
}

fn pictograph(letter: Letter, blue: MotionData, red: MotionData) -> PictographData {
    PictographData::new(Some(letter))
        .with_motion(blue)
        .with_motion(red)
}

fn cw() -> RotationDirection {
    RotationDirection::Clockwise
}

#[test]
fn basic_key_encodes_layer_and_phase() {
    let mut m = motion(MotionColor::Blue, MotionType::Pro, cw(), Turns::Count(0.0));
    assert_eq!(generic_placement_key(&m), "pro_to_layer1_alpha");
    m.start_orientation = Orientation::Out;
    assert_eq!(generic_placement_key(&m), "pro_to_layer1_beta");
    m.start_orientation = Orientation::Clock;
    assert_eq!(generic_placement_key(&m), "pro_to_layer2_alpha");
    m.start_orientation = Orientation::Counter;
    assert_eq!(generic_placement_key(&m), "pro_to_layer2_beta");
}

#[test]
fn letter_suffix_only_for_hybrids() {
    let m = motion(MotionColor::Blue, MotionType::Dash, cw(), Turns::Count(0.0));
    assert_eq!(placement_key(&m, Some(Letter::A)), "dash_to_layer1_alpha");
    assert_eq!(placement_key(&m, Some(Letter::Phi)), "dash_to_layer1_alpha_Φ");
    assert_eq!(placement_key(&m, None), "dash_to_layer1_alpha");
}

#[test]
fn candidate_order_is_most_specific_first() {
    let m = motion(MotionColor::Red, MotionType::Anti, cw(), Turns::Count(1.0));
    assert_eq!(
        special_attribute_candidates(&m, Some(Letter::C)),
        vec![
            "anti_to_layer1_alpha_C".to_owned(),
            "anti_to_layer1_alpha".to_owned(),
            "red".to_owned(),
            "anti".to_owned(),
        ]
    );
    assert_eq!(
        default_key_candidates(&m, Some(Letter::B)),
        vec!["anti_to_layer1_alpha".to_owned()]
    );
}

#[test]
fn orientation_key_variants() {
    let blue = motion(MotionColor::Blue, MotionType::Pro, cw(), Turns::Count(0.0));
    let red = motion(MotionColor::Red, MotionType::Pro, cw(), Turns::Count(0.0));
    let p = pictograph(Letter::A, blue, red);
    assert_eq!(orientation_key(&p).to_string(), "from_layer1");

    let mut p2 = p.clone();
    for m in p2.motions.values_mut() {
        m.end_orientation = Orientation::Counter;
    }
    assert_eq!(orientation_key(&p2), OrientationKey::FromLayer2);

    let mut p3 = p.clone();
    if let Some(red) = p3.motions.get_mut(&MotionColor::Red) {
        red.end_orientation = Orientation::Clock;
    }
    assert_eq!(
        orientation_key(&p3).to_string(),
        "from_layer3_blue1_red2"
    );

    let single = PictographData::new(Some(Letter::A)).with_motion(MotionData {
        end_orientation: Orientation::Clock,
        ..blue
    });
    assert_eq!(orientation_key(&single), OrientationKey::FromLayer2);
}

#[test]
fn type1_tuple_is_blue_then_red() {
    let blue = motion(MotionColor::Blue, MotionType::Pro, cw(), Turns::Count(1.0));
    let red = motion(MotionColor::Red, MotionType::Anti, cw(), Turns::Count(0.5));
    let p = pictograph(Letter::C, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(1, 0.5)"));
}

#[test]
fn float_sentinel_renders_as_fl() {
    let blue = motion(
        MotionColor::Blue,
        MotionType::Float,
        RotationDirection::NoRotation,
        Turns::Float,
    );
    let red = motion(MotionColor::Red, MotionType::Static, cw(), Turns::Count(2.0));
    let p = pictograph(Letter::W, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(fl, 2)"));
}

#[test]
fn type3_tuple_orders_shift_before_dash() {
    let blue = motion(MotionColor::Blue, MotionType::Dash, cw(), Turns::Count(0.0));
    let red = motion(
        MotionColor::Red,
        MotionType::Pro,
        RotationDirection::CounterClockwise,
        Turns::Count(1.5),
    );
    let p = pictograph(Letter::WDash, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(o, 1.5, 0)"));
}

#[test]
fn type4_tuple_orders_dash_before_static() {
    let blue = motion(MotionColor::Blue, MotionType::Static, cw(), Turns::Count(1.0));
    let red = motion(MotionColor::Red, MotionType::Dash, cw(), Turns::Count(2.0));
    let p = pictograph(Letter::Psi, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(s, 2, 1)"));
}

#[test]
fn type5_tuple_carries_direction_only_when_both_rotate() {
    let blue = motion(MotionColor::Blue, MotionType::Dash, cw(), Turns::Count(1.0));
    let red = motion(
        MotionColor::Red,
        MotionType::Dash,
        RotationDirection::CounterClockwise,
        Turns::Count(1.0),
    );
    let p = pictograph(Letter::PhiDash, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(o, 1, 1)"));

    let still = motion(
        MotionColor::Red,
        MotionType::Dash,
        RotationDirection::NoRotation,
        Turns::Count(0.0),
    );
    let p = pictograph(Letter::PhiDash, blue, still);
    assert_eq!(turns_tuple_key(&p).unwrap().as_deref(), Some("(1, 0)"));
}

#[test]
fn missing_motions_yield_no_tuple_and_missing_letter_errors() {
    let blue = motion(MotionColor::Blue, MotionType::Pro, cw(), Turns::Count(0.0));
    let single = PictographData::new(Some(Letter::A)).with_motion(blue);
    assert_eq!(turns_tuple_key(&single).unwrap(), None);

    let unlabeled = PictographData::new(None).with_motion(blue);
    assert!(matches!(
        turns_tuple_key(&unlabeled),
        Err(PlacementError::MalformedPictograph(_))
    ));
}

#[test]
fn mismatched_roles_yield_no_tuple() {
    let blue = motion(MotionColor::Blue, MotionType::Pro, cw(), Turns::Count(0.0));
    let red = motion(MotionColor::Red, MotionType::Pro, cw(), Turns::Count(0.0));
    let p = pictograph(Letter::XDash, blue, red);
    assert_eq!(turns_tuple_key(&p).unwrap(), None);
}
