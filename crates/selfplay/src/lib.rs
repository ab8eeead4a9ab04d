//! Self-play runner
//!
//! A front end that only talks to engines through `Engine::get_move`:
//! - Plays engine-vs-engine games from a start position
//! - Reads match settings from TOML
//! - Writes JSON game records
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run -p selfplay -- crates/selfplay/match.toml
//! ```

mod config;
mod match_runner;
mod record;

pub use config::*;
pub use match_runner::*;
pub use record::*;
