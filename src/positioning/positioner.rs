use std::{collections::BTreeMap, sync::Arc};

use rayon::prelude::*;

use crate::{
    domain::model::{ArrowPlacementData, MotionColor, MotionData, PictographData},
    foundation::core::{Vec2, normalize_degrees},
    foundation::error::{PlacementError, PlacementResult},
    grid::coords::CoordinateSystem,
    grid::mode::GridMode,
    location::arrow_location,
    placement::default::DefaultPlacementLookup,
    placement::keys::{orientation_key, special_attribute_candidates, turns_tuple_key},
    placement::quadrant::quadrant_index,
    placement::source::PlacementSource,
    placement::special::{SpecialDocKey, SpecialPlacementLookup},
    placement::tuples::directional_tuples,
    positioning::rotation::{arrow_rotation, is_mirrored},
};

#[derive(Clone, Debug, Default)]
/// Options for [`ArrowPositioner`].
pub struct PositionerOpts {
    /// Compute per-color arrows on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count of that pool; rayon's default when `None`. Must be >= 1 when set.
    pub threads: Option<usize>,
}

/// End-to-end arrow positioning pipeline.
///
/// Holds the placement lookups (and their load-once caches) for its lifetime; share one
/// positioner to keep tables warm.
pub struct ArrowPositioner {
    defaults: DefaultPlacementLookup,
    specials: SpecialPlacementLookup,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for ArrowPositioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrowPositioner")
            .field("defaults", &self.defaults)
            .field("specials", &self.specials)
            .field("parallel", &self.pool.is_some())
            .finish()
    }
}

impl ArrowPositioner {
    /// Positioner reading placement tables from `source`.
    pub fn new(source: Arc<dyn PlacementSource>, opts: PositionerOpts) -> PlacementResult<Self> {
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self {
            defaults: DefaultPlacementLookup::new(Arc::clone(&source)),
            specials: SpecialPlacementLookup::new(source),
            pool,
        })
    }

    /// Sequential positioner over `source`.
    pub fn with_source(source: impl PlacementSource + 'static) -> PlacementResult<Self> {
        Self::new(Arc::new(source), PositionerOpts::default())
    }

    /// Default adjustment lookup.
    pub fn default_lookup(&self) -> &DefaultPlacementLookup {
        &self.defaults
    }

    /// Special override lookup.
    pub fn special_lookup(&self) -> &SpecialPlacementLookup {
        &self.specials
    }

    /// Place the arrow of `motion` within `pictograph`.
    ///
    /// Only a structurally malformed pictograph is an error. Invalid motion data is placed at the
    /// scene center, missing placement data yields a zero adjustment.
    #[tracing::instrument(skip(self, pictograph, motion), fields(color = %motion.color))]
    pub fn calculate_arrow_point(
        &self,
        pictograph: &PictographData,
        motion: &MotionData,
    ) -> PlacementResult<ArrowPlacementData> {
        pictograph.validate()?;
        let manual_offset = pictograph.manual_offsets.get(&motion.color).copied();

        if let Err(err) = motion.validate() {
            tracing::warn!(%err, "placing arrow at scene center");
            return Ok(Self::center_fallback(motion, manual_offset));
        }

        let letter = pictograph.letter;
        let location = arrow_location(motion, letter)?;
        let grid_mode = pictograph.grid_mode().resolve_for(motion);

        let anchor = CoordinateSystem::coordinate(location, grid_mode).unwrap_or_else(|| {
            tracing::warn!(%location, %grid_mode, "no scene coordinate, using scene center");
            CoordinateSystem::scene_center()
        });
        let quadrant = quadrant_index(motion, location);

        let special = self.special_context(pictograph, grid_mode)?;
        let base = special
            .as_ref()
            .and_then(|(key, tuple)| {
                self.specials.adjustment(
                    key,
                    tuple,
                    &special_attribute_candidates(motion, letter),
                )
            })
            .unwrap_or_else(|| self.defaults.adjustment(motion, letter, grid_mode));
        let adjustment = directional_tuples(base, motion)[quadrant];

        let position = anchor + adjustment + manual_offset.unwrap_or(Vec2::ZERO);
        let rotation_deg = special
            .as_ref()
            .and_then(|(key, tuple)| self.specials.rotation_override(key, tuple, motion))
            .map(normalize_degrees)
            .unwrap_or_else(|| arrow_rotation(motion, location));

        tracing::debug!(%location, %grid_mode, quadrant, x = position.x, y = position.y, rotation_deg, "placed arrow");

        Ok(ArrowPlacementData {
            color: motion.color,
            location,
            position,
            rotation_deg,
            mirror: is_mirrored(motion),
            adjustment,
            manual_offset,
        })
    }

    /// Place the arrows of every motion in `pictograph`, keyed by color.
    #[tracing::instrument(skip(self, pictograph), fields(letter = ?pictograph.letter))]
    pub fn calculate_all_arrow_points(
        &self,
        pictograph: &PictographData,
    ) -> PlacementResult<BTreeMap<MotionColor, ArrowPlacementData>> {
        pictograph.validate()?;
        let motions: Vec<&MotionData> = pictograph.motions.values().collect();
        let place = |motion: &&MotionData| {
            self.calculate_arrow_point(pictograph, motion)
                .map(|arrow| (motion.color, arrow))
        };

        match &self.pool {
            Some(pool) => pool.install(|| motions.par_iter().map(place).collect()),
            None => motions.iter().map(place).collect(),
        }
    }

    fn special_context(
        &self,
        pictograph: &PictographData,
        grid_mode: GridMode,
    ) -> PlacementResult<Option<(SpecialDocKey, String)>> {
        let Some(letter) = pictograph.letter else {
            return Ok(None);
        };
        let Some(tuple) = turns_tuple_key(pictograph)? else {
            return Ok(None);
        };
        let key = SpecialDocKey {
            grid_mode,
            orientation: orientation_key(pictograph),
            letter,
        };
        Ok(Some((key, tuple)))
    }

    fn center_fallback(motion: &MotionData, manual_offset: Option<Vec2>) -> ArrowPlacementData {
        ArrowPlacementData {
            color: motion.color,
            location: motion.start_location,
            position: CoordinateSystem::scene_center() + manual_offset.unwrap_or(Vec2::ZERO),
            rotation_deg: 0.0,
            mirror: false,
            adjustment: Vec2::ZERO,
            manual_offset,
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> PlacementResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PlacementError::validation(
            "positioner 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PlacementError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/positioner.rs"]
mod tests;
