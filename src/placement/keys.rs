use std::fmt;

use crate::{
    domain::letter::{Letter, LetterType},
    domain::model::{MotionData, MotionType, Orientation, PictographData},
    foundation::error::{PlacementError, PlacementResult},
};

/// Placement key without the letter suffix: `<motion_type>_to_layer<N>_<alpha|beta>`.
pub fn generic_placement_key(motion: &MotionData) -> String {
    let phase = match motion.start_orientation {
        Orientation::In | Orientation::Clock => "alpha",
        Orientation::Out | Orientation::Counter => "beta",
    };
    format!(
        "{}_to_layer{}_{}",
        motion.motion_type,
        motion.start_orientation.layer(),
        phase
    )
}

/// Most specific placement key: the generic key, suffixed with the letter for hybrid letters.
pub fn placement_key(motion: &MotionData, letter: Option<Letter>) -> String {
    let generic = generic_placement_key(motion);
    match letter {
        Some(letter) if letter.is_hybrid() => format!("{generic}_{letter}"),
        _ => generic,
    }
}

/// Keys tried against the default table, most specific first.
pub fn default_key_candidates(motion: &MotionData, letter: Option<Letter>) -> Vec<String> {
    let generic = generic_placement_key(motion);
    let mut out = Vec::with_capacity(2);
    if let Some(letter) = letter.filter(|l| l.is_hybrid()) {
        out.push(format!("{generic}_{letter}"));
    }
    out.push(generic);
    out
}

/// Attribute keys tried against a special document, most specific first.
pub fn special_attribute_candidates(motion: &MotionData, letter: Option<Letter>) -> Vec<String> {
    let mut out = default_key_candidates(motion, letter);
    out.push(motion.color.as_str().to_owned());
    out.push(motion.motion_type.as_str().to_owned());
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Which orientation layers the pictograph's motions end on.
pub enum OrientationKey {
    /// All end orientations are in/out.
    FromLayer1,
    /// All end orientations are clock/counter.
    FromLayer2,
    /// Blue and red end on different layers.
    FromLayer3 {
        /// Blue end layer (1 or 2).
        blue: u8,
        /// Red end layer (1 or 2).
        red: u8,
    },
}

impl OrientationKey {
    fn single(layer: u8) -> Self {
        if layer == 2 {
            OrientationKey::FromLayer2
        } else {
            OrientationKey::FromLayer1
        }
    }
}

impl fmt::Display for OrientationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationKey::FromLayer1 => f.write_str("from_layer1"),
            OrientationKey::FromLayer2 => f.write_str("from_layer2"),
            OrientationKey::FromLayer3 { blue, red } => {
                write!(f, "from_layer3_blue{blue}_red{red}")
            }
        }
    }
}

/// Orientation key of `pictograph`, from the end orientations of its motions.
pub fn orientation_key(pictograph: &PictographData) -> OrientationKey {
    let blue = pictograph.blue().map(|m| m.end_orientation.layer());
    let red = pictograph.red().map(|m| m.end_orientation.layer());
    match (blue, red) {
        (Some(b), Some(r)) if b == r => OrientationKey::single(b),
        (Some(blue), Some(red)) => OrientationKey::FromLayer3 { blue, red },
        (Some(layer), None) | (None, Some(layer)) => OrientationKey::single(layer),
        (None, None) => OrientationKey::FromLayer1,
    }
}

fn direction_token(a: &MotionData, b: &MotionData) -> &'static str {
    if a.has_rotation() && b.has_rotation() && a.rotation_direction != b.rotation_direction {
        "o"
    } else {
        "s"
    }
}

fn split_roles<'a>(
    a: &'a MotionData,
    b: &'a MotionData,
    first: impl Fn(&MotionData) -> bool,
    second: impl Fn(&MotionData) -> bool,
) -> Option<(&'a MotionData, &'a MotionData)> {
    if first(a) && second(b) {
        Some((a, b))
    } else if first(b) && second(a) {
        Some((b, a))
    } else {
        None
    }
}

/// Turns-tuple key used to index special placement documents.
///
/// Returns `Ok(None)` when the pictograph lacks the motions its letter type needs.
pub fn turns_tuple_key(pictograph: &PictographData) -> PlacementResult<Option<String>> {
    let letter = pictograph.letter.ok_or_else(|| {
        PlacementError::malformed_pictograph("turns tuple requested for a pictograph without a letter")
    })?;
    let (Some(blue), Some(red)) = (pictograph.blue(), pictograph.red()) else {
        tracing::debug!(%letter, "pictograph has fewer than two motions, no turns tuple");
        return Ok(None);
    };

    let key = match letter.letter_type() {
        LetterType::Type1 | LetterType::Type2 => format!("({}, {})", blue.turns, red.turns),
        LetterType::Type3 => {
            let Some((shift, dash)) = split_roles(
                blue,
                red,
                |m| m.motion_type.is_shift(),
                |m| m.motion_type == MotionType::Dash,
            ) else {
                tracing::debug!(%letter, "expected one shift and one dash, no turns tuple");
                return Ok(None);
            };
            format!(
                "({}, {}, {})",
                direction_token(shift, dash),
                shift.turns,
                dash.turns
            )
        }
        LetterType::Type4 => {
            let Some((dash, stat)) = split_roles(
                blue,
                red,
                |m| m.motion_type == MotionType::Dash,
                |m| m.motion_type == MotionType::Static,
            ) else {
                tracing::debug!(%letter, "expected one dash and one static, no turns tuple");
                return Ok(None);
            };
            format!(
                "({}, {}, {})",
                direction_token(dash, stat),
                dash.turns,
                stat.turns
            )
        }
        LetterType::Type5 | LetterType::Type6 => {
            if blue.has_rotation() && red.has_rotation() {
                format!(
                    "({}, {}, {})",
                    direction_token(blue, red),
                    blue.turns,
                    red.turns
                )
            } else {
                format!("({}, {})", blue.turns, red.turns)
            }
        }
    };
    Ok(Some(key))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/keys.rs"]
mod tests;
