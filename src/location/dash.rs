use crate::{
    domain::letter::Letter,
    domain::model::{Location, MotionData, RotationDirection},
    foundation::error::PlacementError,
    location::LocationCalculator,
};

/// Dash motions: the arrow sits a quarter turn off the straight path through the center.
#[derive(Clone, Copy, Debug)]
pub struct DashLocationCalculator {
    letter: Letter,
    is_lambda: bool,
    is_lambda_dash: bool,
}

impl DashLocationCalculator {
    /// Calculator for a dash in a pictograph labeled `letter`; family flags come from the letter.
    pub fn new(letter: Letter) -> Self {
        Self::with_flags(letter, letter.is_lambda(), letter.is_lambda_dash())
    }

    /// Calculator with explicit family flags.
    pub fn with_flags(letter: Letter, is_lambda: bool, is_lambda_dash: bool) -> Self {
        Self {
            letter,
            is_lambda,
            is_lambda_dash,
        }
    }
}

impl LocationCalculator for DashLocationCalculator {
    fn calculate(&self, motion: &MotionData) -> Location {
        let start = motion.start_location;
        let end = motion.end_location;

        if motion.turns.is_rotating() {
            match motion.rotation_direction {
                RotationDirection::Clockwise => return start.rotated(2),
                RotationDirection::CounterClockwise => return start.rotated(-2),
                RotationDirection::NoRotation => {}
            }
        }

        match start.steps_to(end) {
            0 | 4 if self.is_lambda || self.is_lambda_dash => start.rotated(-2),
            0 | 4 => start.rotated(2),
            _ => {
                let err = PlacementError::missing_location_pair(start, end);
                tracing::warn!(%err, letter = %self.letter, "dash path does not cross the center, keeping start location");
                start
            }
        }
    }
}
