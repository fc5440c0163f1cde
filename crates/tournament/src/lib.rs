//! Headless tournament runner
//!
//! This crate provides infrastructure for:
//! - Building any of the computer opponents by name
//! - Playing single games and color-alternating matches between them
//! - Round robins driven by a TOML config, with JSON result files
//!
//! # Usage
//!
//! ```bash
//! # Ten games between the minimax and alpha-beta opponents
//! cargo run -p tournament -- match minimax alphabeta --games 10
//!
//! # Every pairing of the players listed in a config file
//! cargo run -p tournament -- round-robin --config tournament.toml
//! ```

mod config;
mod error;
mod match_runner;
mod players;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use players::*;
pub use results::*;
