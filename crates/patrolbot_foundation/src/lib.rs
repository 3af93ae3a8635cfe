//! Core types, values, and errors for the patrolbot command grammar.
//!
//! This crate provides:
//! - [`Value`] - A decoded command argument
//! - [`Point3`] - Three-dimensional coordinates
//! - [`ParamType`] - Parameter type tags declared by the grammar
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod point;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use point::Point3;
pub use types::ParamType;
pub use value::Value;

/// Result type alias using the patrolbot error type.
pub type Result<T> = std::result::Result<T, Error>;
