use std::{collections::BTreeMap, fmt};

use crate::{
    domain::letter::Letter,
    foundation::core::{Point, Vec2},
    foundation::error::{PlacementError, PlacementResult},
    grid::mode::{GridMode, derive_grid_mode_for},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// One of the 8 compass points of the pictograph grid, indexed clockwise from north.
pub enum Location {
    /// North.
    #[serde(rename = "n", alias = "north")]
    North,
    /// North-east.
    #[serde(rename = "ne", alias = "northeast")]
    NorthEast,
    /// East.
    #[serde(rename = "e", alias = "east")]
    East,
    /// South-east.
    #[serde(rename = "se", alias = "southeast")]
    SouthEast,
    /// South.
    #[serde(rename = "s", alias = "south")]
    South,
    /// South-west.
    #[serde(rename = "sw", alias = "southwest")]
    SouthWest,
    /// West.
    #[serde(rename = "w", alias = "west")]
    West,
    /// North-west.
    #[serde(rename = "nw", alias = "northwest")]
    NorthWest,
}

impl Location {
    /// All locations in clockwise order starting at north.
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::NorthEast,
        Location::East,
        Location::SouthEast,
        Location::South,
        Location::SouthWest,
        Location::West,
        Location::NorthWest,
    ];

    /// Clockwise index from north (`0..8`).
    pub fn index(self) -> i32 {
        match self {
            Location::North => 0,
            Location::NorthEast => 1,
            Location::East => 2,
            Location::SouthEast => 3,
            Location::South => 4,
            Location::SouthWest => 5,
            Location::West => 6,
            Location::NorthWest => 7,
        }
    }

    /// Location for a clockwise index; wraps modulo 8.
    pub fn from_index(index: i32) -> Location {
        Self::ALL[index.rem_euclid(8) as usize]
    }

    /// Rotate by `steps` eighth turns (45°). Positive is clockwise.
    pub fn rotated(self, steps: i32) -> Location {
        Self::from_index(self.index() + steps)
    }

    /// Clockwise eighth-turn steps from `self` to `other`, in `0..8`.
    pub fn steps_to(self, other: Location) -> i32 {
        (other.index() - self.index()).rem_euclid(8)
    }

    /// `true` for N, E, S and W.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Compass bearing in degrees (north = 0, clockwise).
    pub fn bearing_deg(self) -> f64 {
        f64::from(self.index()) * 45.0
    }

    /// Lowercase short name (`"n"`, `"ne"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Location::North => "n",
            Location::NorthEast => "ne",
            Location::East => "e",
            Location::SouthEast => "se",
            Location::South => "s",
            Location::SouthWest => "sw",
            Location::West => "w",
            Location::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Kind of prop motion.
pub enum MotionType {
    /// Prop rotates with the hand path.
    Pro,
    /// Prop rotates against the hand path.
    Anti,
    /// Prop does not rotate relative to the hand.
    Float,
    /// Hand travels straight through the center.
    Dash,
    /// Hand stays in place.
    Static,
}

impl MotionType {
    /// Lowercase name used in placement keys and tables.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        }
    }

    /// `true` for the shift family (pro, anti, float).
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Prop rotation direction.
pub enum RotationDirection {
    /// Clockwise.
    #[serde(rename = "cw", alias = "clockwise")]
    Clockwise,
    /// Counterclockwise.
    #[serde(rename = "ccw", alias = "counterclockwise", alias = "counter_clockwise")]
    CounterClockwise,
    /// No rotation.
    #[default]
    #[serde(rename = "none", alias = "no_rot", alias = "norotation")]
    NoRotation,
}

impl RotationDirection {
    /// Short name (`"cw"`, `"ccw"`, `"none"`).
    pub fn as_str(self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::NoRotation => "none",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Prop orientation at the start or end of a motion.
pub enum Orientation {
    /// Head toward the center.
    #[default]
    In,
    /// Head away from the center.
    Out,
    /// Head turned clockwise.
    Clock,
    /// Head turned counterclockwise.
    Counter,
}

impl Orientation {
    /// Orientation layer: 1 for radial (in/out), 2 for non-radial (clock/counter).
    pub fn layer(self) -> u8 {
        match self {
            Orientation::In | Orientation::Out => 1,
            Orientation::Clock | Orientation::Counter => 2,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Which of the two props a motion belongs to.
pub enum MotionColor {
    /// The blue prop.
    Blue,
    /// The red prop.
    Red,
}

impl MotionColor {
    /// Lowercase name used in placement documents.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionColor::Blue => "blue",
            MotionColor::Red => "red",
        }
    }
}

impl fmt::Display for MotionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Turn count of a motion, or the float sentinel.
///
/// Serialized as a plain number or the string `"fl"`.
pub enum Turns {
    /// Number of (half) turns; one of `0, 0.5, 1, 1.5, 2, 2.5, 3` in well-formed data.
    Count(f64),
    /// Float sentinel for props that do not rotate relative to the hand.
    Float,
}

impl Default for Turns {
    fn default() -> Self {
        Turns::Count(0.0)
    }
}

impl Turns {
    /// `true` when the turn count is strictly positive.
    pub fn is_rotating(self) -> bool {
        matches!(self, Turns::Count(n) if n > 0.0)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Turns::Count(n) => write!(f, "{n}"),
            Turns::Float => f.write_str("fl"),
        }
    }
}

impl serde::Serialize for Turns {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Turns::Count(n) => serializer.serialize_f64(n),
            Turns::Float => serializer.serialize_str("fl"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Turns {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Turns::Count(n)),
            Repr::Text(s) if s.trim() == "fl" => Ok(Turns::Float),
            Repr::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Turns::Count)
                .map_err(|_| serde::de::Error::custom(format!("invalid turns value '{s}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One prop's path within a pictograph.
pub struct MotionData {
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
    /// Owning prop.
    pub color: MotionColor,
}

impl MotionData {
    /// Check the invariants the positioning pipeline relies on.
    pub fn validate(&self) -> PlacementResult<()> {
        if let Turns::Count(n) = self.turns
            && (!n.is_finite() || n < 0.0)
        {
            return Err(PlacementError::invalid_motion(format!(
                "{} motion turns must be finite and >= 0, got {n}",
                self.color
            )));
        }
        if matches!(self.motion_type, MotionType::Pro | MotionType::Anti)
            && self.rotation_direction == RotationDirection::NoRotation
        {
            return Err(PlacementError::invalid_motion(format!(
                "{} {} motion requires a rotation direction",
                self.color, self.motion_type
            )));
        }
        Ok(())
    }

    /// `true` when the prop has a rotation direction.
    pub fn has_rotation(&self) -> bool {
        self.rotation_direction != RotationDirection::NoRotation
    }

    /// Direction the hand travels around the grid from start to end.
    ///
    /// A quarter turn clockwise is [`RotationDirection::Clockwise`], a quarter turn
    /// counterclockwise is [`RotationDirection::CounterClockwise`]; anything else has none.
    pub fn hand_path_direction(&self) -> RotationDirection {
        match self.start_location.steps_to(self.end_location) {
            2 => RotationDirection::Clockwise,
            6 => RotationDirection::CounterClockwise,
            _ => RotationDirection::NoRotation,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One symbolic frame: up to two motions labeled by a letter.
///
/// The grid mode is never stored; it is derived from the motions by [`PictographData::grid_mode`].
pub struct PictographData {
    /// Letter labeling the pictograph, when known.
    #[serde(default)]
    pub letter: Option<Letter>,
    /// Motions keyed by prop color.
    #[serde(default)]
    pub motions: BTreeMap<MotionColor, MotionData>,
    /// User-supplied arrow offsets applied after all computed adjustments.
    #[serde(default)]
    pub manual_offsets: BTreeMap<MotionColor, Vec2>,
}

impl PictographData {
    /// Empty pictograph for `letter`.
    pub fn new(letter: Option<Letter>) -> Self {
        Self {
            letter,
            ..Self::default()
        }
    }

    /// Insert `motion` under its own color.
    pub fn with_motion(mut self, motion: MotionData) -> Self {
        self.motions.insert(motion.color, motion);
        self
    }

    /// Set the manual arrow offset for `color`.
    pub fn with_manual_offset(mut self, color: MotionColor, offset: Vec2) -> Self {
        self.manual_offsets.insert(color, offset);
        self
    }

    /// Motion for `color`, if present.
    pub fn motion(&self, color: MotionColor) -> Option<&MotionData> {
        self.motions.get(&color)
    }

    /// Blue motion, if present.
    pub fn blue(&self) -> Option<&MotionData> {
        self.motion(MotionColor::Blue)
    }

    /// Red motion, if present.
    pub fn red(&self) -> Option<&MotionData> {
        self.motion(MotionColor::Red)
    }

    /// Grid mode derived from the present motions.
    pub fn grid_mode(&self) -> GridMode {
        derive_grid_mode_for(self.motions.values())
    }

    /// Reject structurally malformed data (a motion stored under another color).
    pub fn validate(&self) -> PlacementResult<()> {
        for (color, motion) in &self.motions {
            if *color != motion.color {
                return Err(PlacementError::malformed_pictograph(format!(
                    "motion stored under '{color}' has color '{}'",
                    motion.color
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Computed placement of one arrow glyph.
///
/// A derived artifact: valid only for the motion, letter and grid mode it was computed from.
pub struct ArrowPlacementData {
    /// Prop the arrow belongs to.
    pub color: MotionColor,
    /// Grid location the arrow was anchored to.
    pub location: Location,
    /// Final scene position.
    pub position: Point,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation_deg: f64,
    /// Whether the glyph is drawn mirrored.
    pub mirror: bool,
    /// Quadrant adjustment added to the anchor coordinate.
    pub adjustment: Vec2,
    /// Manual offset applied last, if any.
    pub manual_offset: Option<Vec2>,
}

impl ArrowPlacementData {
    /// `(x, y, rotation_deg)` triple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.position.x, self.position.y, self.rotation_deg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/model.rs"]
mod tests;
