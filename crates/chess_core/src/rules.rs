//! The contract the search consumes from a rules engine.
//!
//! The search never looks inside a board. It enumerates moves, plays and
//! takes them back in strict LIFO order, asks a handful of terminal-state
//! questions, reads squares for evaluation and keys its cache by hash.

use std::fmt;

use crate::error::RulesError;
use crate::types::{Color, Piece};

pub trait Rules {
    /// Opaque move token. Only ever produced by `legal_moves_into`.
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Appends every legal move for the side to move.
    ///
    /// The order is up to the implementation but must be deterministic;
    /// the search uses it as its tie-break.
    fn legal_moves_into(&self, moves: &mut Vec<Self::Move>);

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Plays `mv` in place. Fails with [`RulesError::IllegalMove`] and leaves
    /// the position untouched if `mv` is not legal here.
    fn apply_move(&mut self, mv: Self::Move) -> Result<(), RulesError>;

    /// Takes back the most recently applied move.
    fn undo_move(&mut self) -> Result<(), RulesError>;

    /// The side to move has been mated.
    fn is_checkmate(&self) -> bool;

    /// The side to move has no legal move and is not in check.
    fn is_stalemate(&self) -> bool;

    fn is_in_check(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Occupant of `sq` (0..64, a1 = 0).
    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Hash that is identical for identical board states.
    fn position_hash(&self) -> u64;
}
