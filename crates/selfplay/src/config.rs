//! Match configuration loaded from TOML

use std::path::{Path, PathBuf};

use chess_core::{Color, Engine, Position};
use classical_engine::{
    Algorithm, EngineConfig, HeuristicEvaluator, MinimaxEngine, RootSelection, Weights,
};
use random_utility::RandomUtility;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse match config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid match config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Engine(#[from] classical_engine::ConfigError),
}

/// Static evaluator a player searches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    #[default]
    Heuristic,
    Random,
}

/// One side of a match. The maximizing side is assigned per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_depth: u8,
    pub algorithm: Algorithm,
    pub root: RootSelection,
    pub transposition: bool,
    pub evaluator: EvaluatorKind,
    /// Seed for the random evaluator
    pub seed: u64,
    pub weights: Weights,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            max_depth: engine.max_depth,
            algorithm: engine.algorithm,
            root: engine.root,
            transposition: engine.transposition,
            evaluator: EvaluatorKind::Heuristic,
            seed: 0,
            weights: Weights::default(),
        }
    }
}

impl PlayerConfig {
    pub fn engine_config(&self, side: Color) -> EngineConfig {
        EngineConfig::new(side)
            .with_depth(self.max_depth)
            .with_algorithm(self.algorithm)
            .with_root(self.root)
            .with_transposition(self.transposition)
    }

    /// Build an engine that plays (and maximizes for) `side`.
    pub fn build(&self, side: Color) -> Result<Box<dyn Engine<Position>>, ConfigError> {
        let config = self.engine_config(side);
        let engine: Box<dyn Engine<Position>> = match self.evaluator {
            EvaluatorKind::Heuristic => Box::new(MinimaxEngine::with_evaluator(
                config,
                HeuristicEvaluator::with_weights(side, self.weights),
            )?),
            EvaluatorKind::Random => Box::new(MinimaxEngine::with_evaluator(
                config,
                RandomUtility::new(side, self.seed),
            )?),
        };
        Ok(engine)
    }

    /// Short description used in logs and game records
    pub fn label(&self) -> String {
        let evaluator = match self.evaluator {
            EvaluatorKind::Heuristic => "heuristic",
            EvaluatorKind::Random => "random",
        };
        let search = match self.algorithm {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        };
        format!("{search} d{} {evaluator}", self.max_depth)
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Start position (None = standard start)
    pub start_fen: Option<String>,
    /// Where to write the JSON match record (None = don't write)
    pub record_path: Option<PathBuf>,
    pub engine1: PlayerConfig,
    pub engine2: PlayerConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 2,
            max_plies: 200,
            alternate_colors: true,
            start_fen: None,
            record_path: None,
            engine1: PlayerConfig::default(),
            engine2: PlayerConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [&self.engine1, &self.engine2] {
            player.engine_config(Color::White).validate()?;
        }
        self.start_position()?;
        Ok(())
    }

    pub fn start_position(&self) -> Result<Position, ConfigError> {
        match &self.start_fen {
            Some(fen) => Position::from_fen(fen).map_err(|e| ConfigError::Invalid(e.to_string())),
            None => Ok(Position::startpos()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
