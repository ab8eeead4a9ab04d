//! Error taxonomy shared by the rules engine and the search.

use thiserror::Error;

/// Violations of the rules-engine contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A move was rejected by the rules engine in the current state.
    #[error("illegal move {mv} in the current position")]
    IllegalMove { mv: String },
    /// `undo_move` was called with no unmatched `apply_move` on the stack.
    #[error("undo requested with no move to take back")]
    UndoWithoutMove,
    #[error("invalid FEN {fen:?}")]
    InvalidFen { fen: String },
}

/// Fatal search failures.
///
/// Both variants mean the collaborator contract (or the search's own
/// apply/undo bookkeeping) is broken; the search aborts and returns no move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    /// A node that passed the cutoff test had nothing to play.
    #[error("non-terminal node at ply {ply} has no legal moves")]
    NoLegalMoves { ply: u8 },
}
