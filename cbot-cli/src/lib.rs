//! # cbot-cli
//!
//! CLI foundation: argument parsing, config loading, snapshot persistence, session wiring.

pub mod cli;
pub mod config;
pub mod session;
pub mod snapshot;

pub use cli::{Cli, Commands};
pub use config::AppConfig;
pub use session::{build_chain, build_tracker, persist, run_demo, run_turn, Turn, DEMO_SCRIPT};
pub use snapshot::{load_snapshot, save_snapshot};
