use crate::{
    domain::model::{Location, MotionData},
    foundation::error::PlacementError,
    location::LocationCalculator,
};

/// Pro, anti and float motions: the arrow sits between the start and end points.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShiftLocationCalculator;

impl ShiftLocationCalculator {
    /// Midpoint of an adjacent pair, in either order.
    pub fn midpoint(start: Location, end: Location) -> Option<Location> {
        use Location as L;

        let mid = match (start, end) {
            (L::North, L::East) | (L::East, L::North) => L::NorthEast,
            (L::East, L::South) | (L::South, L::East) => L::SouthEast,
            (L::South, L::West) | (L::West, L::South) => L::SouthWest,
            (L::West, L::North) | (L::North, L::West) => L::NorthWest,
            (L::NorthEast, L::SouthEast) | (L::SouthEast, L::NorthEast) => L::East,
            (L::SouthEast, L::SouthWest) | (L::SouthWest, L::SouthEast) => L::South,
            (L::SouthWest, L::NorthWest) | (L::NorthWest, L::SouthWest) => L::West,
            (L::NorthWest, L::NorthEast) | (L::NorthEast, L::NorthWest) => L::North,
            _ => return None,
        };
        Some(mid)
    }
}

impl LocationCalculator for ShiftLocationCalculator {
    fn calculate(&self, motion: &MotionData) -> Location {
        Self::midpoint(motion.start_location, motion.end_location).unwrap_or_else(|| {
            let err =
                PlacementError::missing_location_pair(motion.start_location, motion.end_location);
            tracing::warn!(%err, motion_type = %motion.motion_type, "defaulting shift arrow to north");
            Location::North
        })
    }
}
