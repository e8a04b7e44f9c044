//! Arrow placement for pictographs.
//!
//! A pictograph shows two simultaneous prop motions (blue and red) on a compass-point grid and is
//! labeled by a letter. This crate draws nothing; it computes where each motion's arrow glyph
//! goes, how it is rotated and whether it is mirrored.
//!
//! # Pipeline overview
//!
//! For each motion, [`ArrowPositioner::calculate_arrow_point`] runs:
//!
//! 1. **Locate**: motion -> grid [`Location`] (shift / static / dash calculators)
//! 2. **Anchor**: location + [`GridMode`] -> scene coordinate ([`CoordinateSystem`])
//! 3. **Quadrant**: motion + location -> quadrant index `0..4`
//! 4. **Adjust**: letter-specific special placement, else the default table
//! 5. **Orient**: quadrant variant of the base adjustment, then any manual offset
//! 6. **Rotate**: rotation angle (special override first) and mirror flag
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs and placement data give bit-identical output.
//! - **Total**: missing data degrades to documented defaults; only malformed pictographs error.
//! - **Load once**: each placement table is fetched at most once per positioner, even under
//!   concurrent use.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod domain;
mod foundation;
mod grid;
mod location;
mod placement;
mod positioning;

/// Standalone walkthrough of the placement model and data layout.
pub mod guide;

pub use domain::letter::{Letter, LetterClass, LetterFamily, LetterType, classify};
pub use domain::model::{
    ArrowPlacementData, Location, MotionColor, MotionData, MotionType, Orientation,
    PictographData, RotationDirection, Turns,
};
pub use domain::movement::{HandMotion, MovementRow, parse_movement_rows};
pub use foundation::core::{Point, Rect, SCENE_SIZE, Vec2, normalize_degrees};
pub use foundation::error::{PlacementError, PlacementResult};
pub use grid::coords::{CoordinateSystem, GridPoints};
pub use grid::mode::{GridMode, derive_grid_mode, derive_grid_mode_for};
pub use location::{
    DashLocationCalculator, LocationCalculator, ShiftLocationCalculator,
    StaticLocationCalculator, arrow_location,
};
pub use placement::default::{DefaultPlacementLookup, DefaultPlacementTable};
pub use placement::keys::{
    OrientationKey, default_key_candidates, generic_placement_key, orientation_key,
    placement_key, special_attribute_candidates, turns_tuple_key,
};
pub use placement::quadrant::quadrant_index;
pub use placement::source::{InMemorySource, JsonDirSource, PlacementSource};
pub use placement::special::{
    SpecialDocKey, SpecialPlacementDoc, SpecialPlacementLookup, SpecialValue,
};
pub use placement::tuples::directional_tuples;
pub use positioning::positioner::{ArrowPositioner, PositionerOpts};
pub use positioning::rotation::{arrow_rotation, is_mirrored};
