use crate::{
    domain::model::{MotionData, MotionType, RotationDirection},
    foundation::core::Vec2,
    foundation::math::{reflect_anti_diagonal, rotate_quarter_turns},
};

/// `true` when the base adjustment is stored for the other hand and has to be mirrored.
pub(crate) fn is_reflected(motion: &MotionData) -> bool {
    use RotationDirection as R;

    match motion.motion_type {
        MotionType::Pro | MotionType::Static | MotionType::Dash => {
            motion.rotation_direction == R::CounterClockwise
        }
        MotionType::Anti => motion.rotation_direction == R::Clockwise,
        MotionType::Float => motion.hand_path_direction() == R::CounterClockwise,
    }
}

/// Expand the quadrant-0 adjustment `base` into one variant per quadrant.
///
/// Quadrant `i` is the handed base turned `i` quarter turns clockwise.
pub fn directional_tuples(base: Vec2, motion: &MotionData) -> [Vec2; 4] {
    let handed = if is_reflected(motion) {
        reflect_anti_diagonal(base)
    } else {
        base
    };
    [0, 1, 2, 3].map(|i| rotate_quarter_turns(handed, i))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/tuples.rs"]
mod tests;
