//! patrolbot - Chat-command patrol bot
//!
//! This crate re-exports all layers of the patrolbot system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: patrolbot_runtime    - Chat session, console, config, logging
//! Layer 1: patrolbot_parser     - Command grammar, decoders, parser
//! Layer 0: patrolbot_foundation - Core types (Value, ParamType, Point3, Error)
//! ```

pub use patrolbot_foundation as foundation;
pub use patrolbot_parser as parser;
pub use patrolbot_runtime as runtime;
