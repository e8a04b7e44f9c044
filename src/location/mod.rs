//! Arrow location calculators, one per motion family.

mod dash;
mod shift;

pub use dash::DashLocationCalculator;
pub use shift::ShiftLocationCalculator;

use crate::{
    domain::letter::Letter,
    domain::model::{Location, MotionData, MotionType},
    foundation::error::{PlacementError, PlacementResult},
};

/// Maps a motion to the grid location its arrow is anchored to.
pub trait LocationCalculator {
    /// Location of the arrow for `motion`. Total: unknown inputs resolve to a logged default.
    fn calculate(&self, motion: &MotionData) -> Location;
}

/// Static motions keep their arrow at the hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLocationCalculator;

impl LocationCalculator for StaticLocationCalculator {
    fn calculate(&self, motion: &MotionData) -> Location {
        motion.start_location
    }
}

/// Resolve the arrow location of `motion`, dispatching on its type.
///
/// Dash motions need the pictograph letter; a dash without one is malformed.
pub fn arrow_location(motion: &MotionData, letter: Option<Letter>) -> PlacementResult<Location> {
    match motion.motion_type {
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            Ok(ShiftLocationCalculator.calculate(motion))
        }
        MotionType::Static => Ok(StaticLocationCalculator.calculate(motion)),
        MotionType::Dash => {
            let letter = letter.ok_or_else(|| {
                PlacementError::malformed_pictograph(format!(
                    "{} dash motion in a pictograph without a letter",
                    motion.color
                ))
            })?;
            Ok(DashLocationCalculator::new(letter).calculate(motion))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/location/calculators.rs"]
mod tests;
