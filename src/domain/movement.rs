use crate::{
    domain::letter::Letter,
    domain::model::{
        Location, MotionColor, MotionData, MotionType, Orientation, PictographData,
        RotationDirection, Turns,
    },
    foundation::error::{PlacementError, PlacementResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One hand's columns of a movement row. The color comes from the column it was read from.
pub struct HandMotion {
    /// Motion kind.
    pub motion_type: MotionType,
    /// Prop rotation direction.
    #[serde(default)]
    pub rotation_direction: RotationDirection,
    /// Where the hand starts.
    pub start_location: Location,
    /// Where the hand ends.
    pub end_location: Location,
    /// Prop orientation at the start.
    #[serde(default)]
    pub start_orientation: Orientation,
    /// Prop orientation at the end.
    #[serde(default)]
    pub end_orientation: Orientation,
    /// Turn count or float sentinel.
    #[serde(default)]
    pub turns: Turns,
}

impl HandMotion {
    /// Attach `color` to produce a [`MotionData`].
    pub fn into_motion(self, color: MotionColor) -> MotionData {
        MotionData {
            motion_type: self.motion_type,
            rotation_direction: self.rotation_direction,
            start_location: self.start_location,
            end_location: self.end_location,
            start_orientation: self.start_orientation,
            end_orientation: self.end_orientation,
            turns: self.turns,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One row of the movement table. Columns beyond the letter and the two hands are ignored.
pub struct MovementRow {
    /// Letter labeling the row.
    pub letter: Letter,
    /// Blue hand, if the row has one.
    #[serde(default)]
    pub blue: Option<HandMotion>,
    /// Red hand, if the row has one.
    #[serde(default)]
    pub red: Option<HandMotion>,
}

impl MovementRow {
    /// Build the pictograph this row describes.
    pub fn to_pictograph(&self) -> PictographData {
        let mut pictograph = PictographData::new(Some(self.letter));
        if let Some(blue) = self.blue {
            pictograph = pictograph.with_motion(blue.into_motion(MotionColor::Blue));
        }
        if let Some(red) = self.red {
            pictograph = pictograph.with_motion(red.into_motion(MotionColor::Red));
        }
        pictograph
    }
}

/// Parse a JSON array of movement rows.
pub fn parse_movement_rows(json: &str) -> PlacementResult<Vec<MovementRow>> {
    serde_json::from_str(json).map_err(|e| PlacementError::serde(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/domain/movement.rs"]
mod tests;
