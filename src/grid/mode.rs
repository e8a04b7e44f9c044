use std::fmt;

use crate::{domain::model::MotionData, foundation::error::PlacementError};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Layout of the pictograph grid.
pub enum GridMode {
    /// Hands on the cardinal points.
    #[default]
    Diamond,
    /// Hands on the intercardinal points.
    Box,
    /// Hands on both.
    Skewed,
}

impl GridMode {
    /// Lowercase name, also the directory name of the mode's placement data.
    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
            GridMode::Skewed => "skewed",
        }
    }

    /// Grid a single motion lives on: diamond when it starts on a cardinal point, box otherwise.
    pub fn for_motion(motion: &MotionData) -> GridMode {
        if motion.start_location.is_cardinal() {
            GridMode::Diamond
        } else {
            GridMode::Box
        }
    }

    /// Mode used for arrow-level lookups of `motion`: skewed pictographs defer to the motion.
    pub fn resolve_for(self, motion: &MotionData) -> GridMode {
        match self {
            GridMode::Skewed => GridMode::for_motion(motion),
            mode => mode,
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointSet {
    Cardinal,
    Intercardinal,
    Mixed,
}

fn point_set(motion: &MotionData) -> PointSet {
    match (
        motion.start_location.is_cardinal(),
        motion.end_location.is_cardinal(),
    ) {
        (true, true) => PointSet::Cardinal,
        (false, false) => PointSet::Intercardinal,
        _ => PointSet::Mixed,
    }
}

/// Grid mode of a pictograph with two motions.
pub fn derive_grid_mode(first: &MotionData, second: &MotionData) -> GridMode {
    derive_grid_mode_for([first, second])
}

/// Grid mode of any number of motions. No motions is diamond.
///
/// Any skewed motion makes the whole pictograph skewed. Motions that disagree without being
/// skewed themselves are reported and treated as diamond.
pub fn derive_grid_mode_for<'a>(motions: impl IntoIterator<Item = &'a MotionData>) -> GridMode {
    let mut seen: Option<PointSet> = None;
    let mut inconsistent = false;

    for motion in motions {
        let set = point_set(motion);
        if set == PointSet::Mixed {
            return GridMode::Skewed;
        }
        match seen {
            None => seen = Some(set),
            Some(prev) if prev != set => inconsistent = true,
            Some(_) => {}
        }
    }

    if inconsistent {
        let err = PlacementError::inconsistent_grid_mode(
            "motions disagree on cardinal/intercardinal points",
        );
        tracing::warn!(%err, "falling back to diamond grid");
        return GridMode::Diamond;
    }

    match seen {
        Some(PointSet::Intercardinal) => GridMode::Box,
        _ => GridMode::Diamond,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/mode.rs"]
mod tests;
