use fnv::FnvHashMap;

use crate::data::{Key, Symbol};

/// Memoized distances between keys.
///
/// Entries are keyed by symbols only so one cache must never be used with more than one keypad.
/// Sharing it between searches on the same keypad is fine, they only ever add entries.
#[derive(Debug, Clone, Default)]
pub struct DistanceCache {
    distances: FnvHashMap<(Symbol, Symbol), f64>,
    hits: usize,
    misses: usize,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&mut self, from: Key, to: Key) -> f64 {
        if from.symbol == to.symbol {
            // not worth an entry
            return 0.0;
        }

        let pair = if from.symbol < to.symbol {
            (from.symbol, to.symbol)
        } else {
            (to.symbol, from.symbol)
        };
        if let Some(&dist) = self.distances.get(&pair) {
            self.hits += 1;
            return dist;
        }

        self.misses += 1;
        let dist = from.pos.dist(to.pos);
        self.distances.insert(pair, dist);
        dist
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
