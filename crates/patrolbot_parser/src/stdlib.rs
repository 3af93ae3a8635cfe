//! Standard patrol bot grammar.
//!
//! The command set the bot answers to in chat, plus the custom scalar types
//! it uses.

use patrolbot_foundation::{ParamType, Value};

use crate::grammar::{CommandDef, GrammarRegistry};

/// Name of the compass-direction scalar type.
pub const DIRECTION: &str = "direction";

/// Decodes a compass word or its abbreviation to the canonical direction.
#[must_use]
pub fn decode_direction(word: &str) -> Option<Value> {
    let canonical = match word.to_ascii_lowercase().as_str() {
        "north" | "n" => "north",
        "south" | "s" => "south",
        "east" | "e" => "east",
        "west" | "w" => "west",
        "up" | "u" => "up",
        "down" | "d" => "down",
        _ => return None,
    };
    Some(Value::from(canonical))
}

/// The `patrol` branch and its subcommands.
///
/// - `patrol set (x,y,z) ...` replaces the route
/// - `patrol start` / `patrol stop`
/// - `patrol config <radius> <loop>`
#[must_use]
pub fn patrol_command() -> CommandDef {
    CommandDef::new("patrol")
        .with_subcommand(CommandDef::continued("set", ParamType::Point3))
        .with_subcommand(CommandDef::new("start"))
        .with_subcommand(CommandDef::new("stop"))
        .with_subcommand(CommandDef::leaf(
            "config",
            [ParamType::Float, ParamType::Bool],
        ))
}

/// Builds the standard grammar.
#[must_use]
pub fn standard_grammar() -> GrammarRegistry {
    let mut grammar = GrammarRegistry::new()
        .with_command(patrol_command())
        .with_command(CommandDef::leaf("cmdout", [ParamType::String]))
        .with_command(CommandDef::leaf("say", [ParamType::String]))
        .with_command(CommandDef::leaf(
            "setPatrol",
            [ParamType::String, ParamType::Bool, ParamType::Bool],
        ))
        .with_command(CommandDef::new("startPatrol"))
        .with_command(CommandDef::new("stopPatrol"))
        .with_command(CommandDef::leaf("goto", [ParamType::Point3]))
        .with_command(CommandDef::leaf("face", [ParamType::custom(DIRECTION)]));
    grammar.register_decoder(DIRECTION, decode_direction);
    grammar
}
