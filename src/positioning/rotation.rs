use crate::{
    domain::model::{Location, MotionData, MotionType, RotationDirection},
    foundation::core::normalize_degrees,
};

/// Arrow rotation in degrees, `[0, 360)`, for `motion` anchored at `location`.
///
/// Shift arrows turn along the hand path, static arrows point at their location's bearing and
/// non-rotating dash arrows point in the direction of travel.
pub fn arrow_rotation(motion: &MotionData, location: Location) -> f64 {
    use RotationDirection as R;

    let bearing = location.bearing_deg();
    let deg = match motion.motion_type {
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            let forward = match motion.motion_type {
                MotionType::Float => motion.hand_path_direction(),
                MotionType::Anti => match motion.rotation_direction {
                    R::Clockwise => R::CounterClockwise,
                    R::CounterClockwise => R::Clockwise,
                    R::NoRotation => R::NoRotation,
                },
                _ => motion.rotation_direction,
            };
            match forward {
                R::CounterClockwise => bearing - 135.0,
                R::Clockwise | R::NoRotation => bearing - 45.0,
            }
        }
        MotionType::Static => bearing,
        MotionType::Dash if motion.turns.is_rotating() && motion.has_rotation() => bearing,
        MotionType::Dash => motion.end_location.bearing_deg() - 90.0,
    };
    normalize_degrees(deg)
}

/// Whether the arrow glyph is drawn mirrored.
pub fn is_mirrored(motion: &MotionData) -> bool {
    match motion.motion_type {
        MotionType::Anti => motion.rotation_direction == RotationDirection::Clockwise,
        _ => motion.rotation_direction == RotationDirection::CounterClockwise,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/rotation.rs"]
mod tests;
