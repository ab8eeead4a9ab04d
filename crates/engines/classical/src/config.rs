//! Engine configuration, fixed for the lifetime of an engine.

use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search the recursive procedures are allowed to run.
pub const MAX_SEARCH_DEPTH: u8 = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid engine config: {0}")]
    Invalid(String),
}

/// Which tree search runs below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Full-width minimax, no pruning and no table.
    Minimax,
    #[default]
    AlphaBeta,
}

/// How the alpha-beta root turns its utility into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSelection {
    /// Track the best move during the root descent.
    #[default]
    SinglePass,
    /// Search for the root utility, then re-search each root move with a
    /// full window and take the first exact match.
    Rescan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side whose frame all utilities are expressed in.
    pub maximizing_side: Color,
    /// Depth limit in plies below the root.
    pub max_depth: u8,
    pub algorithm: Algorithm,
    pub root: RootSelection,
    /// Cache frontier scores during alpha-beta.
    pub transposition: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            maximizing_side: Color::White,
            max_depth: 4,
            algorithm: Algorithm::AlphaBeta,
            root: RootSelection::SinglePass,
            transposition: true,
        }
    }
}

impl EngineConfig {
    pub fn new(maximizing_side: Color) -> Self {
        Self {
            maximizing_side,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_root(mut self, root: RootSelection) -> Self {
        self.root = root;
        self
    }

    pub fn with_transposition(mut self, enabled: bool) -> Self {
        self.transposition = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "max_depth {} exceeds the supported maximum of {MAX_SEARCH_DEPTH}",
                self.max_depth
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML engine table.
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
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
