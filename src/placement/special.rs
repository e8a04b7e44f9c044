use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{
    domain::letter::Letter,
    domain::model::MotionData,
    foundation::core::{Vec2, vec_from_pair},
    foundation::error::PlacementError,
    grid::mode::GridMode,
    placement::cache::LoadOnce,
    placement::keys::OrientationKey,
    placement::source::PlacementSource,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// One cell of a special placement document.
pub enum SpecialValue {
    /// `[dx, dy]` adjustment.
    Adjustment([f64; 2]),
    /// Rotation override in degrees.
    RotationAngle(f64),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Letter-specific overrides: `attribute_key -> turns_tuple -> value`.
pub struct SpecialPlacementDoc {
    entries: BTreeMap<String, BTreeMap<String, SpecialValue>>,
}

impl SpecialPlacementDoc {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of an adjustment.
    pub fn with_adjustment(
        mut self,
        attribute: impl Into<String>,
        turns_tuple: impl Into<String>,
        adjustment: [f64; 2],
    ) -> Self {
        self.insert(attribute, turns_tuple, SpecialValue::Adjustment(adjustment));
        self
    }

    /// Builder-style insert of a rotation override.
    pub fn with_rotation_angle(
        mut self,
        attribute: impl Into<String>,
        turns_tuple: impl Into<String>,
        degrees: f64,
    ) -> Self {
        self.insert(attribute, turns_tuple, SpecialValue::RotationAngle(degrees));
        self
    }

    /// Insert one value, replacing any previous value.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        turns_tuple: impl Into<String>,
        value: SpecialValue,
    ) {
        self.entries
            .entry(attribute.into())
            .or_default()
            .insert(turns_tuple.into(), value);
    }

    /// Value stored under `(attribute, turns_tuple)`.
    pub fn get(&self, attribute: &str, turns_tuple: &str) -> Option<SpecialValue> {
        self.entries.get(attribute)?.get(turns_tuple).copied()
    }

    /// `true` when the document holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identity of one special placement document.
pub struct SpecialDocKey {
    /// Grid mode the document applies to.
    pub grid_mode: GridMode,
    /// Orientation key of the pictograph.
    pub orientation: OrientationKey,
    /// Pictograph letter.
    pub letter: Letter,
}

impl fmt::Display for SpecialDocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.grid_mode, self.orientation, self.letter)
    }
}

/// Letter-specific override lookup, one lazily loaded document per [`SpecialDocKey`].
pub struct SpecialPlacementLookup {
    source: Arc<dyn PlacementSource>,
    docs: LoadOnce<SpecialDocKey, SpecialPlacementDoc>,
}

impl fmt::Debug for SpecialPlacementLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialPlacementLookup")
            .field("docs", &self.docs)
            .finish_non_exhaustive()
    }
}

impl SpecialPlacementLookup {
    /// Lookup backed by `source`.
    pub fn new(source: Arc<dyn PlacementSource>) -> Self {
        Self {
            source,
            docs: LoadOnce::new(),
        }
    }

    /// Document for `key`, loading it on first use.
    pub fn document(&self, key: &SpecialDocKey) -> Option<Arc<SpecialPlacementDoc>> {
        self.docs.get_or_load(key, || self.source.load_special(key))
    }

    /// First `[dx, dy]` stored under `turns_tuple` along `candidates`.
    pub fn adjustment(
        &self,
        key: &SpecialDocKey,
        turns_tuple: &str,
        candidates: &[String],
    ) -> Option<Vec2> {
        let doc = self.document(key)?;
        let found = candidates
            .iter()
            .find_map(|attr| match doc.get(attr, turns_tuple) {
                Some(SpecialValue::Adjustment(pair)) => Some(vec_from_pair(pair)),
                _ => None,
            });
        if found.is_none() {
            let err = PlacementError::missing_placement_data(format!(
                "{key}: {candidates:?} at {turns_tuple}"
            ));
            tracing::debug!(%err, "no special adjustment");
        }
        found
    }

    /// Rotation override for `motion`, read from `<color>_rot_angle` then `<motion_type>_rot_angle`.
    pub fn rotation_override(
        &self,
        key: &SpecialDocKey,
        turns_tuple: &str,
        motion: &MotionData,
    ) -> Option<f64> {
        let doc = self.document(key)?;
        [motion.color.as_str(), motion.motion_type.as_str()]
            .into_iter()
            .find_map(|prefix| match doc.get(&format!("{prefix}_rot_angle"), turns_tuple) {
                Some(SpecialValue::RotationAngle(deg)) => Some(deg),
                _ => None,
            })
    }

    /// Number of document loads performed so far.
    pub fn fetch_count(&self) -> usize {
        self.docs.load_count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/special.rs"]
mod tests;
