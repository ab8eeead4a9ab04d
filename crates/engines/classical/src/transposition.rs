//! Cache of frontier scores keyed by position hash.

use std::collections::HashMap;

/// How a cached score relates to the window that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score fell strictly inside the window.
    Exact,
    /// The score met or exceeded beta; the true value is at least this.
    Lower,
    /// The score met or fell below alpha; the true value is at most this.
    Upper,
}

impl Bound {
    /// `score <= alpha` is an upper bound, `score >= beta` a lower bound,
    /// anything in between is exact. The alpha test wins when the window is
    /// empty.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry {
    pub score: i32,
    /// Plies of search the score stands for at the node that stored it.
    pub depth: u8,
    pub bound: Bound,
}

impl TranspositionEntry {
    pub fn new(score: i32, depth: u8, bound: Bound) -> Self {
        Self {
            score,
            depth,
            bound,
        }
    }

    /// Whether the cached score can answer a probe with window `(alpha, beta)`.
    ///
    /// An empty window (`beta <= alpha`) accepts any bound type.
    pub fn answers(&self, alpha: i32, beta: i32) -> bool {
        beta <= alpha
            || match self.bound {
                Bound::Exact => true,
                Bound::Lower => self.score >= beta,
                Bound::Upper => self.score <= alpha,
            }
    }
}

/// One search's worth of cached scores.
///
/// Replacement is last-write-wins; no depth preference.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TranspositionEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `key`, ignoring entries searched shallower than `depth`.
    pub fn probe(&self, key: u64, depth: u8) -> Option<TranspositionEntry> {
        self.entries
            .get(&key)
            .copied()
            .filter(|entry| entry.depth >= depth)
    }

    /// Raw lookup regardless of depth.
    pub fn get(&self, key: u64) -> Option<&TranspositionEntry> {
        self.entries.get(&key)
    }

    pub fn store(&mut self, key: u64, entry: TranspositionEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "transposition_tests.rs"]
mod transposition_tests;
