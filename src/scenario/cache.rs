//! Memoization of simulation results
//!
//! Results are pure functions of their quantized inputs, so a hit is always
//! equivalent to recomputing. Entries are written once and never updated, and
//! there is no eviction: the key space is bounded by what a caller can edit in
//! one session. Drop or `clear` the cache when the owning context goes away.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use log::{debug, trace};

use super::key::CacheKey;
use crate::simulation::SimulationResult;

type Slot = Arc<OnceLock<SimulationResult>>;

/// Thread-safe cache of simulation results keyed on quantized inputs
///
/// The map lock only guards slot lookup; each slot fills itself outside it.
#[derive(Debug, Default)]
pub struct SimulationCache {
    entries: Mutex<HashMap<CacheKey, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SimulationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `key`, computing and storing it on a miss
    ///
    /// Each key is computed at most once. Callers racing on the same key wait
    /// for the first computation; other keys are never blocked by it.
    pub fn get_or_simulate<F>(&self, key: CacheKey, compute: F) -> SimulationResult
    where
        F: FnOnce() -> SimulationResult,
    {
        let slot = Arc::clone(self.lock().entry(key).or_default());

        let mut computed = false;
        let result = *slot.get_or_init(|| {
            computed = true;
            compute()
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("cache miss for {:?}", key);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("cache hit for {:?}", key);
        }
        result
    }

    /// Cached result for `key`, if any
    pub fn get(&self, key: &CacheKey) -> Option<SimulationResult> {
        self.lock().get(key).and_then(|slot| slot.get().copied())
    }

    /// Clear all cached data and statistics
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Number of computed entries
    pub fn len(&self) -> usize {
        self.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    // Slots are never replaced once inserted, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
