pub mod board;
pub mod error;
pub mod eval;
pub mod rules;
pub mod types;

pub use board::{Move, Position};
pub use error::{RulesError, SearchError};
pub use eval::Evaluator;
pub use rules::Rules;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move picker in the workspace
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The chosen move (None if the root has no legal moves)
    pub best_move: Option<M>,
    /// Root utility from the engine's maximizing side
    pub score: i32,
    /// Depth limit the search ran with, in plies
    pub depth: u8,
    /// Number of moves applied during the search
    pub nodes: u64,
    /// Number of static evaluator calls
    pub evaluations: u64,
    /// Cutoff nodes answered from the transposition table
    pub table_hits: u64,
}

/// Trait that all engines must implement.
///
/// The position is borrowed mutably for the duration of one search. The
/// engine plays and takes back moves on it and hands it back in exactly the
/// state it received, on success and on error alike.
pub trait Engine<P: Rules> {
    /// Search the position and report the chosen move with statistics.
    ///
    /// Errors only signal a broken rules-engine contract. A root with no
    /// legal moves is not an error; it yields `best_move == None`.
    fn search(&mut self, pos: &mut P) -> Result<SearchResult<P::Move>, SearchError>;

    /// Pick a legal move for the side to move, or `None` at game over.
    fn get_move(&mut self, pos: &mut P) -> Result<Option<P::Move>, SearchError> {
        Ok(self.search(pos)?.best_move)
    }

    /// Returns the engine's name for logs and game records
    fn name(&self) -> &str;
}
