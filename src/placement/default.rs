use std::{collections::BTreeMap, sync::Arc};

use crate::{
    domain::letter::Letter,
    domain::model::MotionData,
    foundation::core::{Vec2, vec_from_pair},
    foundation::error::PlacementError,
    grid::mode::GridMode,
    placement::cache::LoadOnce,
    placement::keys::default_key_candidates,
    placement::source::PlacementSource,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Generic adjustments of one grid mode: `motion_type -> placement_key -> turns -> [dx, dy]`.
pub struct DefaultPlacementTable {
    entries: BTreeMap<String, BTreeMap<String, BTreeMap<String, [f64; 2]>>>,
}

impl DefaultPlacementTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of one adjustment.
    pub fn with_entry(
        mut self,
        motion_type: impl Into<String>,
        key: impl Into<String>,
        turns: impl Into<String>,
        adjustment: [f64; 2],
    ) -> Self {
        self.insert(motion_type, key, turns, adjustment);
        self
    }

    /// Insert one adjustment, replacing any previous value.
    pub fn insert(
        &mut self,
        motion_type: impl Into<String>,
        key: impl Into<String>,
        turns: impl Into<String>,
        adjustment: [f64; 2],
    ) {
        self.entries
            .entry(motion_type.into())
            .or_default()
            .entry(key.into())
            .or_default()
            .insert(turns.into(), adjustment);
    }

    /// Adjustment stored for the exact `(motion_type, key, turns)` triple.
    pub fn get(&self, motion_type: &str, key: &str, turns: &str) -> Option<Vec2> {
        self.entries
            .get(motion_type)?
            .get(key)?
            .get(turns)
            .copied()
            .map(vec_from_pair)
    }

    /// `true` when the table holds no adjustments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default adjustment lookup, one lazily loaded table per grid mode.
pub struct DefaultPlacementLookup {
    source: Arc<dyn PlacementSource>,
    tables: LoadOnce<GridMode, DefaultPlacementTable>,
}

impl std::fmt::Debug for DefaultPlacementLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPlacementLookup")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

impl DefaultPlacementLookup {
    /// Lookup backed by `source`.
    pub fn new(source: Arc<dyn PlacementSource>) -> Self {
        Self {
            source,
            tables: LoadOnce::new(),
        }
    }

    /// Table for `mode`, loading it on first use.
    pub fn table(&self, mode: GridMode) -> Option<Arc<DefaultPlacementTable>> {
        self.tables
            .get_or_load(&mode, || self.source.load_default(mode))
    }

    /// Base adjustment for `motion`; `(0, 0)` when nothing matches.
    pub fn adjustment(&self, motion: &MotionData, letter: Option<Letter>, mode: GridMode) -> Vec2 {
        let Some(table) = self.table(mode) else {
            let err = PlacementError::missing_placement_data(format!("no {mode} default table"));
            tracing::debug!(%err, "using zero adjustment");
            return Vec2::ZERO;
        };
        let turns = motion.turns.to_string();
        let candidates = default_key_candidates(motion, letter);
        candidates
            .iter()
            .find_map(|key| table.get(motion.motion_type.as_str(), key, &turns))
            .unwrap_or_else(|| {
                let err = PlacementError::missing_placement_data(format!(
                    "{mode}/{}: {candidates:?} at turns {turns}",
                    motion.motion_type
                ));
                tracing::debug!(%err, "using zero adjustment");
                Vec2::ZERO
            })
    }

    /// Number of table loads performed so far.
    pub fn fetch_count(&self) -> usize {
        self.tables.load_count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/default.rs"]
mod tests;
