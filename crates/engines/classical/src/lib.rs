//! Classical Chess Engine
//!
//! Depth-limited minimax over any [`Rules`] implementation, with an
//! alpha-beta variant that caches frontier scores in a per-search
//! transposition table, and a material plus piece-square evaluation.

mod alphabeta;
mod config;
mod eval;
mod minimax;
mod pst;
mod search;
mod transposition;

use chess_core::{Color, Engine, Evaluator, Rules, SearchError, SearchResult};
use tracing::debug;

pub use config::{Algorithm, ConfigError, EngineConfig, RootSelection, MAX_SEARCH_DEPTH};
pub use eval::{HeuristicEvaluator, Weights};
pub use pst::{BISHOP_TABLE, KNIGHT_TABLE, PAWN_TABLE, QUEEN_TABLE, ROOK_TABLE};
pub use search::{Search, SearchStats, NEG_INF, POS_INF};
pub use transposition::{Bound, TranspositionEntry, TranspositionTable};

/// Minimax engine for a fixed maximizing side.
///
/// The transposition table is cleared at the start of every search and
/// kept afterwards only so the last search can be inspected.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<E = HeuristicEvaluator> {
    config: EngineConfig,
    evaluator: E,
    table: TranspositionTable,
}

impl MinimaxEngine<HeuristicEvaluator> {
    /// Engine with default settings and the heuristic evaluator.
    pub fn new(maximizing_side: Color) -> Self {
        Self::assemble(
            EngineConfig::new(maximizing_side),
            HeuristicEvaluator::new(maximizing_side),
        )
    }

    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let evaluator = HeuristicEvaluator::new(config.maximizing_side);
        Self::with_evaluator(config, evaluator)
    }
}

impl<E> MinimaxEngine<E> {
    /// Engine with a caller-supplied evaluator. The evaluator must score
    /// from `config.maximizing_side`.
    pub fn with_evaluator(config: EngineConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, evaluator))
    }

    fn assemble(config: EngineConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            table: TranspositionTable::new(),
        }
    }

    /// Table left behind by the most recent alpha-beta search.
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.table
    }
}

impl<P, E> Engine<P> for MinimaxEngine<E>
where
    P: Rules,
    E: Evaluator<P>,
{
    fn search(&mut self, pos: &mut P) -> Result<SearchResult<P::Move>, SearchError> {
        self.table.clear();
        let config = self.config;
        let table = (config.transposition && config.algorithm == Algorithm::AlphaBeta)
            .then_some(&mut self.table);
        let mut search = Search::new(&mut self.evaluator, table, config.max_depth);

        let best = match (config.algorithm, config.root) {
            (Algorithm::Minimax, _) => search.best_move_minimax(pos)?,
            (Algorithm::AlphaBeta, RootSelection::SinglePass) => search.best_move(pos)?,
            (Algorithm::AlphaBeta, RootSelection::Rescan) => search.best_move_rescan(pos)?,
        };

        let (best_move, score) = match best {
            Some((mv, score)) => {
                debug!(%mv, score, "move to make");
                (Some(mv), score)
            }
            None => {
                let score = search.evaluate(pos);
                debug!(score, "no move");
                (None, score)
            }
        };

        let stats = search.stats();
        debug!(
            depth = config.max_depth,
            nodes = stats.nodes,
            evaluations = stats.evaluations,
            table_hits = stats.table_hits,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth: config.max_depth,
            nodes: stats.nodes,
            evaluations: stats.evaluations,
            table_hits: stats.table_hits,
        })
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}
