//! Error types for patrolbot.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::ParamType;

/// The main error type for patrolbot operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing subcommand error for the given branch path.
    #[must_use]
    pub fn missing_subcommand(command: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingSubcommand {
            command: command.into(),
        })
    }

    /// Creates an unknown subcommand error.
    #[must_use]
    pub fn unknown_subcommand(command: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSubcommand {
            command: command.into(),
            name: name.into(),
        })
    }

    /// Creates an unterminated string error.
    #[must_use]
    pub fn unterminated_string(remaining: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnterminatedString {
            remaining: remaining.into(),
        })
    }

    /// Creates an invalid literal error.
    #[must_use]
    pub fn invalid_literal(expected: ParamType, token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLiteral {
            expected,
            token: token.into(),
        })
    }

    /// Creates an invalid point error.
    #[must_use]
    pub fn invalid_point(remaining: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPoint {
            remaining: remaining.into(),
        })
    }

    /// Creates a trailing arguments error.
    #[must_use]
    pub fn trailing_arguments(command: impl Into<String>, remaining: impl Into<String>) -> Self {
        Self::new(ErrorKind::TrailingArguments {
            command: command.into(),
            remaining: remaining.into(),
        })
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(expected: ParamType, position: usize) -> Self {
        Self::new(ErrorKind::MissingArgument { expected, position })
    }

    /// Creates an unknown parameter type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates a grammar definition error.
    #[must_use]
    pub fn grammar(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Grammar(message.into()))
    }

    /// Returns true if this error was produced while resolving an input line.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::EmptyInput
                | ErrorKind::UnknownCommand(_)
                | ErrorKind::MissingSubcommand { .. }
                | ErrorKind::UnknownSubcommand { .. }
                | ErrorKind::UnterminatedString { .. }
                | ErrorKind::InvalidLiteral { .. }
                | ErrorKind::InvalidPoint { .. }
                | ErrorKind::TrailingArguments { .. }
                | ErrorKind::MissingArgument { .. }
                | ErrorKind::UnknownType(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The input line was blank.
    #[error("empty input")]
    EmptyInput,

    /// The head word has no registry entry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A branch command was given no subcommand word.
    #[error("missing subcommand for {command}")]
    MissingSubcommand {
        /// Path of the branch that needed a subcommand.
        command: String,
    },

    /// A branch command was given a word that names none of its children.
    #[error("unknown subcommand for {command}: {name}")]
    UnknownSubcommand {
        /// Path of the branch being resolved.
        command: String,
        /// The word that did not match.
        name: String,
    },

    /// An opening quote had no matching closing quote.
    #[error("unterminated string: {remaining}")]
    UnterminatedString {
        /// Text from the opening quote onwards.
        remaining: String,
    },

    /// A scalar token failed conversion.
    #[error("invalid {expected} literal: {token:?}")]
    InvalidLiteral {
        /// The declared parameter type.
        expected: ParamType,
        /// The offending token.
        token: String,
    },

    /// The text did not begin with an `(x,y,z)` group.
    #[error("invalid point: {remaining:?}")]
    InvalidPoint {
        /// Remaining text where a point was required.
        remaining: String,
    },

    /// Text remained after all declared parameters were consumed.
    #[error("too many arguments for {command}: {remaining:?}")]
    TrailingArguments {
        /// Path of the leaf command.
        command: String,
        /// Unconsumed text.
        remaining: String,
    },

    /// Input ran out before a required parameter.
    #[error("missing {expected} argument at position {position}")]
    MissingArgument {
        /// The declared parameter type.
        expected: ParamType,
        /// Zero-based parameter index.
        position: usize,
    },

    /// A custom scalar type has no registered decoder.
    #[error("unknown parameter type: {0}")]
    UnknownType(String),

    /// A grammar definition could not be built.
    #[error("grammar error: {0}")]
    Grammar(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// I/O failure.
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// The full input line being parsed.
    pub input: Option<String>,
    /// Resolved command path at the point of failure.
    pub path: Vec<String>,
    /// Source file (grammar or config).
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the command path.
    #[must_use]
    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while parsing {input:?}")?;
        }
        if !self.path.is_empty() {
            write!(f, " at `{}`", self.path.join(" "))?;
        }
        Ok(())
    }
}
