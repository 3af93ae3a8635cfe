//! Command grammar and recursive-descent parser for patrolbot.
//!
//! This crate turns a chat line like `patrol set (1,2,3) (4,5,6)` into a
//! resolved command path plus typed arguments.
//!
//! # Architecture
//!
//! ```text
//! "patrol config 2.5 yes"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HEAD WORD       │  → "patrol" looked up in the GrammarRegistry
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SUBCOMMAND      │  → branch consumes "config", recurses into the child
//! │ DESCENT         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PARAMETER       │  → [Float(2.5), Bool(true)]
//! │ DECODING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLVED        │  → ResolvedCommand { path: "patrol config", args }
//! │ COMMAND         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grammar`] - Command definitions and the grammar registry
//! - [`grammar_file`] - Loading grammars from TOML
//! - [`cursor`] - Walking argument text
//! - [`decoder`] - Per-type decoders and custom scalar registry
//! - [`parser`] - Resolution of input lines
//! - [`command`] - Resolved command output
//! - [`stdlib`] - Standard patrol bot grammar

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod cursor;
pub mod decoder;
pub mod grammar;
pub mod grammar_file;
pub mod parser;
pub mod stdlib;

// Re-export main types for convenience
pub use command::ResolvedCommand;
pub use decoder::{DecoderRegistry, ScalarDecoder};
pub use grammar::{CommandDef, CommandNode, GrammarRegistry, ParamSpec};
pub use parser::CommandParser;
pub use stdlib::standard_grammar;
