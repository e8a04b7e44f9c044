use std::{
    collections::HashMap,
    fmt,
    hash::Hash,
    sync::{
        Arc, Mutex, OnceLock, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::foundation::error::PlacementResult;

type Slot<V> = Arc<OnceLock<Option<Arc<V>>>>;

/// Per-key load-once memo shared by the placement lookups.
///
/// The map lock is only held to find or create a key's slot. Loading happens on the slot, so
/// concurrent first requests for one key run the loader once and the rest wait for its result,
/// while other keys proceed independently.
pub(crate) struct LoadOnce<K, V> {
    slots: Mutex<HashMap<K, Slot<V>>>,
    loads: AtomicUsize,
}

impl<K, V> Default for LoadOnce<K, V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }
}

impl<K, V> LoadOnce<K, V> {
    /// Number of times a loader actually ran.
    pub(crate) fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl<K, V> fmt::Debug for LoadOnce<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOnce")
            .field("loads", &self.load_count())
            .finish_non_exhaustive()
    }
}

impl<K, V> LoadOnce<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, running `load` only if no caller has loaded it yet.
    ///
    /// Absent values and load failures are both cached as `None`; failures are logged.
    pub(crate) fn get_or_load<F>(&self, key: &K, load: F) -> Option<Arc<V>>
    where
        F: FnOnce() -> PlacementResult<Option<V>>,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        slot.get_or_init(|| {
            self.loads.fetch_add(1, Ordering::Relaxed);
            match load() {
                Ok(value) => value.map(Arc::new),
                Err(err) => {
                    tracing::warn!(?key, %err, "placement data failed to load, treating as absent");
                    None
                }
            }
        })
        .clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/cache.rs"]
mod tests;
