//! Depth-limited game-tree search shared by the minimax and alpha-beta paths.
//!
//! Utilities are always in the maximizing side's frame. The root is a max
//! node, its children are min nodes, and so on down to the frontier. The
//! root itself is never cut off by depth, so a depth limit of zero still
//! compares the immediate replies.

use chess_core::{Evaluator, Rules, SearchError};
use tracing::trace;

use crate::transposition::{Bound, TranspositionEntry, TranspositionTable};

/// Window bound standing in for minus infinity.
pub const NEG_INF: i32 = i32::MIN;
/// Window bound standing in for plus infinity.
pub const POS_INF: i32 = i32::MAX;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub table_hits: u64,
}

/// State for one top-level search: the evaluator, an optional table and
/// the depth limit. Lives no longer than a single `get_move` call.
pub struct Search<'a, E> {
    evaluator: &'a mut E,
    table: Option<&'a mut TranspositionTable>,
    max_depth: u8,
    stats: SearchStats,
}

impl<'a, E> Search<'a, E> {
    pub fn new(
        evaluator: &'a mut E,
        table: Option<&'a mut TranspositionTable>,
        max_depth: u8,
    ) -> Self {
        Self {
            evaluator,
            table,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Plies still to go below `ply`. Zero at and past the depth limit.
    pub(crate) fn remaining(&self, ply: u8) -> u8 {
        self.max_depth.saturating_sub(ply)
    }

    /// Depth limit reached (below the root), or the game is over.
    pub(crate) fn is_cutoff<P: Rules>(&self, pos: &P, ply: u8) -> bool {
        (ply > 0 && ply >= self.max_depth) || pos.is_checkmate() || pos.is_stalemate()
    }

    pub(crate) fn evaluate<P>(&mut self, pos: &P) -> i32
    where
        P: Rules,
        E: Evaluator<P>,
    {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(pos)
    }

    /// Legal moves of a node that passed the cutoff test.
    pub(crate) fn expand<P: Rules>(&self, pos: &P, ply: u8) -> Result<Vec<P::Move>, SearchError> {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves { ply });
        }
        Ok(moves)
    }

    /// Applies `mv`, runs `probe` on the child and takes the move back.
    ///
    /// The undo happens before the child's result is inspected, so an error
    /// anywhere below still unwinds every move applied above it.
    pub(crate) fn play<P, F>(&mut self, pos: &mut P, mv: P::Move, probe: F) -> Result<i32, SearchError>
    where
        P: Rules,
        F: FnOnce(&mut Self, &mut P) -> Result<i32, SearchError>,
    {
        pos.apply_move(mv)?;
        self.stats.nodes += 1;
        let value = probe(self, pos);
        pos.undo_move()?;
        value
    }

    /// Static score at a cutoff node, answered from the table when an entry
    /// is deep enough and compatible with `(alpha, beta)`.
    ///
    /// Freshly computed scores are classified against the window and stored,
    /// replacing whatever was there.
    pub(crate) fn frontier<P>(&mut self, pos: &P, alpha: i32, beta: i32, ply: u8) -> i32
    where
        P: Rules,
        E: Evaluator<P>,
    {
        let depth = self.remaining(ply);
        let key = pos.position_hash();

        if let Some(table) = &self.table {
            if let Some(entry) = table.probe(key, depth) {
                if entry.answers(alpha, beta) {
                    self.stats.table_hits += 1;
                    trace!(key, score = entry.score, bound = ?entry.bound, "table hit");
                    return entry.score;
                }
            }
        }

        let score = self.evaluate(pos);
        if let Some(table) = &mut self.table {
            let bound = Bound::classify(score, alpha, beta);
            table.store(key, TranspositionEntry::new(score, depth, bound));
        }
        score
    }

    /// Alpha-beta root that remembers the best move while descending.
    ///
    /// Ties go to the earliest move in generation order. Returns `None` only
    /// for a root without legal moves.
    pub fn best_move<P>(&mut self, pos: &mut P) -> Result<Option<(P::Move, i32)>, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        let mut alpha = NEG_INF;
        let mut best: Option<(P::Move, i32)> = None;

        for mv in pos.legal_moves() {
            let value = self.play(pos, mv, |s, p| s.min_value(p, alpha, POS_INF, 1))?;
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((mv, value));
            }
            alpha = alpha.max(value);
        }
        Ok(best)
    }

    /// Two-pass alpha-beta root: compute the root utility, then replay each
    /// root move with a fresh full window and return the first one whose
    /// value matches.
    ///
    /// Costs a second search of the root moves. Kept for reproducing the
    /// historical move choice; `best_move` picks the same move in one pass.
    pub fn best_move_rescan<P>(&mut self, pos: &mut P) -> Result<Option<(P::Move, i32)>, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if pos.legal_moves().is_empty() {
            return Ok(None);
        }
        let utility = self.max_value(pos, NEG_INF, POS_INF, 0)?;

        for mv in pos.legal_moves() {
            let value = self.play(pos, mv, |s, p| s.min_value(p, NEG_INF, POS_INF, 1))?;
            if value == utility {
                return Ok(Some((mv, utility)));
            }
        }
        Ok(None)
    }

    /// Plain minimax root: first move with the strictly greatest utility.
    pub fn best_move_minimax<P>(&mut self, pos: &mut P) -> Result<Option<(P::Move, i32)>, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        let mut best: Option<(P::Move, i32)> = None;

        for mv in pos.legal_moves() {
            let value = self.play(pos, mv, |s, p| s.minimax_min(p, 1))?;
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((mv, value));
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
