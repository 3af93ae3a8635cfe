//! Integration tests for the patrolbot_parser crate.
//!
//! Tests for the command resolution pipeline:
//! - Subcommand routing
//! - Parameter decoding per type
//! - Continued parameters
//! - Error reporting
//! - Properties over generated input

mod continued;
mod decoding;
mod properties;
mod routing;

use patrolbot_foundation::ParamType;
use patrolbot_parser::{CommandDef, CommandParser, GrammarRegistry, standard_grammar};

/// Standard grammar plus a few commands that cover every parameter type.
pub fn parser() -> CommandParser {
    let mut grammar = standard_grammar();
    grammar.register(CommandDef::new("ping"));
    grammar.register(CommandDef::leaf("line", [ParamType::Point3, ParamType::Point3]));
    grammar.register(CommandDef::leaf("count", [ParamType::Int]));
    grammar.register(CommandDef::leaf("label", [ParamType::String, ParamType::Int]));
    grammar.register(CommandDef::continued("ids", ParamType::Int));
    grammar.register(CommandDef::continued("tags", ParamType::String));
    CommandParser::new(grammar)
}

/// A grammar with no commands.
pub fn empty_parser() -> CommandParser {
    CommandParser::new(GrammarRegistry::new())
}
