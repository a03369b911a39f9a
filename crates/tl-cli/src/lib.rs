//! Time ledger CLI library.
//!
//! This crate provides the interactive menu for the time ledger.

mod cli;
mod config;
pub mod form;
pub mod prompt;
pub mod report;
pub mod session;

pub use cli::Cli;
pub use config::Config;
pub use session::{Session, SessionError, State};
