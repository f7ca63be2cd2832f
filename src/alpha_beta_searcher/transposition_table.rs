//! Bounded transposition table for caching search results.

use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::evaluate::Score;

/// Scores depend on the remaining depth (wins found sooner score higher) and on
/// who is to move, so both are part of the key alongside the position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TTKey {
    pub position: u128,
    pub depth: u8,
    pub maximizing: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub score: Score,
    pub bound_type: BoundType,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

/// Matches the point at which long games used to flush their cache.
pub const DEFAULT_TT_CAPACITY: usize = 10_000;

type FxLruCache = LruCache<TTKey, TTEntry, BuildHasherDefault<FxHasher>>;

/// Least-recently-used cache of search results. A capacity of zero disables
/// caching entirely.
pub struct TranspositionTable {
    table: Option<FxLruCache>,
    hits: usize,
    misses: usize,
    bound_rejected: usize,
    evictions: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        let table = NonZeroUsize::new(capacity)
            .map(|capacity| LruCache::with_hasher(capacity, BuildHasherDefault::default()));

        Self {
            table,
            hits: 0,
            misses: 0,
            bound_rejected: 0,
            evictions: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.table.is_some()
    }

    pub fn store(&mut self, key: TTKey, score: Score, bound_type: BoundType) {
        let Some(table) = self.table.as_mut() else {
            return;
        };

        let entry = TTEntry { score, bound_type };
        if let Some((evicted_key, _)) = table.push(key, entry) {
            if evicted_key != key {
                self.evictions += 1;
            }
        }
    }

    /// Returns a score usable at a node searched with the window
    /// [alpha, beta]: exact entries always, bounds only when they already
    /// fall outside the window.
    pub fn probe(&mut self, key: TTKey, alpha: Score, beta: Score) -> Option<Score> {
        let table = self.table.as_mut()?;

        let Some(entry) = table.get(&key).copied() else {
            self.misses += 1;
            return None;
        };

        let usable = match entry.bound_type {
            BoundType::Exact => true,
            BoundType::Lower => entry.score >= beta,
            BoundType::Upper => entry.score <= alpha,
        };

        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            self.bound_rejected += 1;
            None
        }
    }

    pub fn clear(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.clear();
        }
        self.hits = 0;
        self.misses = 0;
        self.bound_rejected = 0;
        self.evictions = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn bound_rejected(&self) -> usize {
        self.bound_rejected
    }

    pub fn evictions(&self) -> usize {
        self.evictions
    }

    pub fn size(&self) -> usize {
        self.table.as_ref().map_or(0, |table| table.len())
    }

    pub fn capacity(&self) -> usize {
        self.table.as_ref().map_or(0, |table| table.cap().get())
    }
}
