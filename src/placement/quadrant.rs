use crate::{
    domain::model::{Location, MotionData},
    grid::mode::GridMode,
};

fn cardinal_index(location: Location) -> Option<usize> {
    match location {
        Location::North => Some(0),
        Location::East => Some(1),
        Location::South => Some(2),
        Location::West => Some(3),
        _ => None,
    }
}

fn intercardinal_index(location: Location) -> Option<usize> {
    match location {
        Location::NorthEast => Some(0),
        Location::SouthEast => Some(1),
        Location::SouthWest => Some(2),
        Location::NorthWest => Some(3),
        _ => None,
    }
}

/// Quadrant (`0..4`) of an arrow at `location` for `motion`.
///
/// The motion's own grid selects the map: shift arrows sit on the other point set than the hands,
/// static and dash arrows on the same one. Unmapped locations fall back to quadrant 0.
pub fn quadrant_index(motion: &MotionData, location: Location) -> usize {
    let mode = GridMode::for_motion(motion);
    let shift = motion.motion_type.is_shift();
    let index = match (mode, shift) {
        (GridMode::Diamond, true) | (GridMode::Box, false) => intercardinal_index(location),
        _ => cardinal_index(location),
    };
    index.unwrap_or_else(|| {
        tracing::warn!(
            %location,
            grid_mode = %mode,
            motion_type = %motion.motion_type,
            "location missing from quadrant map, using quadrant 0"
        );
        0
    })
}

#[cfg(test)]
#[path = "../../tests/unit/placement/quadrant.rs"]
mod tests;
