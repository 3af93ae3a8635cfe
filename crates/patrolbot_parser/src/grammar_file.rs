//! Grammar files.
//!
//! Commands can be declared in TOML instead of code:
//!
//! ```toml
//! [[command]]
//! name = "cmdout"
//! params = ["string"]
//!
//! [[command]]
//! name = "patrol"
//!
//!   [[command.subcommand]]
//!   name = "set"
//!   params = ["point3"]
//!   continued = true
//!
//!   [[command.subcommand]]
//!   name = "stop"
//! ```

use std::fs;
use std::path::Path;

use patrolbot_foundation::{Error, ErrorContext, ParamType, Result};
use serde::Deserialize;

use crate::grammar::{CommandDef, GrammarRegistry, ParamSpec};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarFile {
    #[serde(default, rename = "command")]
    commands: Vec<CommandEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandEntry {
    name: String,
    #[serde(default)]
    params: Vec<ParamType>,
    #[serde(default)]
    continued: bool,
    #[serde(default, rename = "subcommand")]
    subcommands: Vec<CommandEntry>,
}

impl CommandEntry {
    fn into_definition(self) -> Result<CommandDef> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(Error::grammar(format!(
                "invalid command name {:?}",
                self.name
            )));
        }

        if !self.subcommands.is_empty() {
            if !self.params.is_empty() || self.continued {
                return Err(Error::grammar(format!(
                    "`{}` declares both parameters and subcommands",
                    self.name
                )));
            }
            let mut def = CommandDef::new(self.name);
            for child in self.subcommands {
                def.attach_subcommand(child.into_definition()?);
            }
            return Ok(def);
        }

        let params = if self.continued {
            let [ty] = <[ParamType; 1]>::try_from(self.params).map_err(|params| {
                Error::grammar(format!(
                    "continued command `{}` must declare exactly one parameter, found {}",
                    self.name,
                    params.len()
                ))
            })?;
            ParamSpec::continued(ty)
        } else {
            ParamSpec::new(self.params)
        };
        Ok(CommandDef::with_params(self.name, params))
    }
}

/// Parses command definitions from TOML source.
///
/// # Errors
///
/// Returns a `Grammar` error for malformed TOML or an invalid definition.
pub fn parse_grammar(source: &str) -> Result<Vec<CommandDef>> {
    let file: GrammarFile = toml::from_str(source).map_err(|e| Error::grammar(e.to_string()))?;
    file.commands
        .into_iter()
        .map(CommandEntry::into_definition)
        .collect()
}

impl GrammarRegistry {
    /// Registers every command declared in TOML source.
    ///
    /// Returns the number of top-level commands registered. Later
    /// declarations replace earlier ones with the same name.
    ///
    /// # Errors
    ///
    /// Returns a `Grammar` error if the source is invalid; nothing is
    /// registered in that case.
    pub fn extend_from_toml(&mut self, source: &str) -> Result<usize> {
        let defs = parse_grammar(source)?;
        let count = defs.len();
        for def in defs {
            self.register(def);
        }
        Ok(count)
    }

    /// Registers every command declared in a TOML grammar file.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, or a `Grammar` error
    /// if it is invalid.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let context = || ErrorContext::new().with_source(path.display().to_string());
        let source = fs::read_to_string(path).map_err(|e| Error::from(e).with_context(context()))?;
        self.extend_from_toml(&source)
            .map_err(|e| e.with_context(context()))
    }
}
