//! Integration tests for the grammar registry.
//!
//! Tests for command registration:
//! - Overwrite semantics for commands and subcommands
//! - Custom scalar decoders
//! - TOML grammar files

mod files;
