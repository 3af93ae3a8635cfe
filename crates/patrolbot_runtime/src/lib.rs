//! Chat session, console, and CLI for patrolbot.
//!
//! This crate provides:
//! - [`PatrolSession`] - Routes resolved chat commands into patrol state
//! - [`Repl`] - Interactive console that feeds typed lines to the session
//! - [`RuntimeConfig`] - TOML configuration
//! - [`init_logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{GrammarCompleter, LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{ConsoleOutcome, Repl};
pub use session::{PatrolSession, PatrolState, Reply};
