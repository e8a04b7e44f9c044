//! # Arrow placement guide
//!
//! This module is a standalone walkthrough of how the crate turns abstract motions into arrow
//! placements. If you are looking for a quick example, start with the repository `README.md`.
//! If you are changing placement behavior, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PictographData`](crate::PictographData): a letter plus up to two motions keyed by color
//! - [`MotionData`](crate::MotionData): one prop's path (type, locations, orientations, turns)
//! - [`GridMode`](crate::GridMode): diamond, box or skewed; always derived from the motions
//! - [`ArrowPositioner`](crate::ArrowPositioner): runs the placement pipeline
//! - [`ArrowPlacementData`](crate::ArrowPlacementData): the output (position, rotation, mirror)
//! - [`PlacementSource`](crate::PlacementSource): the only place placement data is read
//!
//! ---
//!
//! ## Grid and scene
//!
//! The scene is a `950 x 950` square centered on `(475, 475)`. Hands sit on the cardinal points
//! in diamond mode and on the intercardinal points in box mode. Shift arrows are drawn on the
//! opposite point set (the "layer 2" points), static and dash arrows on the hand points.
//! [`CoordinateSystem`](crate::CoordinateSystem) holds both tables for each mode.
//!
//! A pictograph whose motions mix both point sets is skewed. Arrow lookups in a skewed pictograph
//! use the grid of the motion itself.
//!
//! ---
//!
//! ## Adjustments
//!
//! Every arrow gets a small `[dx, dy]` nudge away from its anchor point. The nudge is stored once,
//! for quadrant 0, and rotated into the other three quadrants by
//! [`directional_tuples`](crate::directional_tuples). Hands that move the other way get a mirrored
//! base before rotation.
//!
//! Two kinds of tables feed the base nudge:
//!
//! - **Default** tables, one per grid mode:
//!   `motion_type -> placement_key -> turns -> [dx, dy]`
//! - **Special** documents, one per grid mode, orientation key and letter:
//!   `attribute_key -> turns_tuple -> [dx, dy] | rotation_angle`
//!
//! Special documents win. Within a document the attribute keys are tried in order:
//! letter-suffixed placement key (hybrid letters only), generic placement key, motion color,
//! motion type. A miss everywhere means a zero nudge, not an error.
//!
//! Key formats:
//!
//! - placement key: `pro_to_layer1_alpha`, `dash_to_layer2_beta_Φ`
//! - orientation key: `from_layer1`, `from_layer2`, `from_layer3_blue1_red2`
//! - turns tuple: `(1, 0.5)`, `(s, 1, 0)`, `(o, fl, 2)`
//!
//! ---
//!
//! ## Placement data on disk
//!
//! [`JsonDirSource`](crate::JsonDirSource) reads:
//!
//! ```text
//! <root>/diamond/default_placements.json
//! <root>/diamond/special/from_layer1/Φ_placements.json
//! <root>/box/default_placements.json
//! ...
//! ```
//!
//! Missing files are normal and mean "no data". Malformed files are logged and treated as missing,
//! so a broken document degrades placement instead of failing it.
//!
//! ---
//!
//! ## Caching and threads
//!
//! Each positioner loads every table at most once. Concurrent first requests for one table wait
//! on a single load. Keep one positioner alive and share it across threads (`ArrowPositioner` is
//! `Send + Sync`).
//!
//! Set [`PositionerOpts::parallel`](crate::PositionerOpts) to compute the blue and red arrows of a
//! pictograph on a dedicated rayon pool.
//!
//! ---
//!
//! ## Errors
//!
//! Only structurally malformed pictographs fail: a dash motion without a letter, or a motion
//! stored under the wrong color. Everything else falls back and logs through `tracing`:
//!
//! - unknown shift pair: arrow at north
//! - invalid motion data: arrow at the scene center
//! - inconsistent grid modes: diamond
//! - missing placement data: zero adjustment
