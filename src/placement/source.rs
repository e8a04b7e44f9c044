use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    foundation::error::{PlacementError, PlacementResult},
    grid::mode::GridMode,
    placement::default::DefaultPlacementTable,
    placement::special::{SpecialDocKey, SpecialPlacementDoc},
};

/// Where placement tables come from.
///
/// `Ok(None)` means the document does not exist, which is common for special placements.
pub trait PlacementSource: Send + Sync {
    /// Default table of `grid_mode`.
    fn load_default(&self, grid_mode: GridMode) -> PlacementResult<Option<DefaultPlacementTable>>;

    /// Special document identified by `key`.
    fn load_special(&self, key: &SpecialDocKey) -> PlacementResult<Option<SpecialPlacementDoc>>;
}

#[derive(Clone, Debug, Default)]
/// Placement tables held in memory.
pub struct InMemorySource {
    defaults: HashMap<GridMode, DefaultPlacementTable>,
    specials: HashMap<SpecialDocKey, SpecialPlacementDoc>,
}

impl InMemorySource {
    /// Empty source: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a default table.
    pub fn with_default(mut self, grid_mode: GridMode, table: DefaultPlacementTable) -> Self {
        self.defaults.insert(grid_mode, table);
        self
    }

    /// Builder-style registration of a special document.
    pub fn with_special(mut self, key: SpecialDocKey, doc: SpecialPlacementDoc) -> Self {
        self.specials.insert(key, doc);
        self
    }
}

impl PlacementSource for InMemorySource {
    fn load_default(&self, grid_mode: GridMode) -> PlacementResult<Option<DefaultPlacementTable>> {
        Ok(self.defaults.get(&grid_mode).cloned())
    }

    fn load_special(&self, key: &SpecialDocKey) -> PlacementResult<Option<SpecialPlacementDoc>> {
        Ok(self.specials.get(key).cloned())
    }
}

#[derive(Clone, Debug)]
/// Placement JSON files under a data root.
///
/// Layout:
/// - `<root>/<mode>/default_placements.json`
/// - `<root>/<mode>/special/<orientation_key>/<letter>_placements.json`
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    /// Source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the default table of `grid_mode`.
    pub fn default_path(&self, grid_mode: GridMode) -> PathBuf {
        self.root
            .join(grid_mode.as_str())
            .join("default_placements.json")
    }

    /// Path of the special document identified by `key`.
    pub fn special_path(&self, key: &SpecialDocKey) -> PathBuf {
        self.root
            .join(key.grid_mode.as_str())
            .join("special")
            .join(key.orientation.to_string())
            .join(format!("{}_placements.json", key.letter))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> PlacementResult<Option<T>> {
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("read placement data '{}'", path.display()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| PlacementError::serde(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded placement data");
        Ok(Some(value))
    }
}

impl PlacementSource for JsonDirSource {
    fn load_default(&self, grid_mode: GridMode) -> PlacementResult<Option<DefaultPlacementTable>> {
        Self::read_json(&self.default_path(grid_mode))
    }

    fn load_special(&self, key: &SpecialDocKey) -> PlacementResult<Option<SpecialPlacementDoc>> {
        Self::read_json(&self.special_path(key))
    }
}
