//! Match runner for playing games between engines

use chess_core::{Color, Position, Rules, SearchError};
use tracing::{debug, info};

use crate::config::{ConfigError, MatchConfig, PlayerConfig};
use crate::record::{GameRecord, GameResult, MatchRecord, MatchResult, Termination};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("engine failed: {0}")]
    Search(#[from] SearchError),
    /// The engine declined to move although the position still has legal
    /// moves. Only the rescan root strategy can do this.
    #[error("{engine} returned no move for {side:?} at ply {ply} with {legal} legal moves")]
    NoMoveChosen {
        engine: String,
        side: Color,
        ply: usize,
        legal: usize,
    },
}

/// Runs matches between two configured engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the configured match
    ///
    /// Results are from engine1's perspective. Engines are rebuilt for every
    /// game because the maximizing side follows the colour they play.
    pub fn run_match(&self) -> Result<MatchRecord, MatchError> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.games as usize);

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white, black) = if engine1_white {
                (&self.config.engine1, &self.config.engine2)
            } else {
                (&self.config.engine2, &self.config.engine1)
            };

            let game = self.play_game(white, black)?;
            let outcome = if engine1_white {
                game.result
            } else {
                game.result.flipped()
            };
            result.add(outcome);

            info!(
                game = game_num + 1,
                of = self.config.games,
                engine1_white,
                termination = game.termination.as_str(),
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            games.push(game);
        }

        Ok(MatchRecord {
            engine1: self.config.engine1.label(),
            engine2: self.config.engine2.label(),
            result,
            games,
        })
    }

    /// Play a single game, result from white's perspective
    pub fn play_game(
        &self,
        white: &PlayerConfig,
        black: &PlayerConfig,
    ) -> Result<GameRecord, MatchError> {
        let mut pos = self.config.start_position()?;
        let start_fen = pos.fen();
        let mut white_engine = white.build(Color::White)?;
        let mut black_engine = black.build(Color::Black)?;
        let mut moves = Vec::new();

        let (result, termination) = loop {
            if moves.len() as u32 >= self.config.max_plies {
                break (GameResult::Draw, Termination::PlyLimit);
            }

            let side = pos.side_to_move();
            let (engine, player) = match side {
                Color::White => (&mut white_engine, white),
                Color::Black => (&mut black_engine, black),
            };

            match engine.get_move(&mut pos)? {
                Some(mv) => {
                    debug!(ply = moves.len() + 1, ?side, %mv, "move played");
                    pos.apply_move(mv).map_err(SearchError::from)?;
                    moves.push(mv.to_string());
                }
                None => {
                    let legal = pos.legal_moves().len();
                    if legal > 0 {
                        return Err(MatchError::NoMoveChosen {
                            engine: player.label(),
                            side,
                            ply: moves.len(),
                            legal,
                        });
                    }
                    break game_over(&pos);
                }
            }

            if pos.halfmove_clock() >= 100 {
                break (GameResult::Draw, Termination::FiftyMoveRule);
            }
        };

        Ok(GameRecord {
            white: white.label(),
            black: black.label(),
            start_fen,
            moves,
            result,
            termination,
        })
    }
}

/// Outcome of a position where the side to move has no legal moves
fn game_over(pos: &Position) -> (GameResult, Termination) {
    if pos.is_checkmate() {
        let result = match pos.side_to_move() {
            Color::White => GameResult::Loss,
            Color::Black => GameResult::Win,
        };
        (result, Termination::Checkmate)
    } else {
        (GameResult::Draw, Termination::Stalemate)
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
