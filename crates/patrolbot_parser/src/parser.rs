//! Command resolution.
//!
//! Resolves an input line against a [`GrammarRegistry`]: the head word picks
//! a top-level command, each branch consumes one more word to pick a child,
//! and the leaf decodes whatever text is left.

use patrolbot_foundation::{Error, ErrorContext, ErrorKind, ParamType, Result, Value};
use tracing::{debug, trace};

use crate::command::ResolvedCommand;
use crate::cursor::{ArgCursor, split_head};
use crate::decoder::{scan_points, take_point};
use crate::grammar::{CommandDef, CommandNode, GrammarRegistry, ParamSpec};

/// Parses chat lines into resolved commands.
///
/// Parsing takes `&self` and mutates nothing, so one parser can be shared
/// across threads once the grammar is built.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
    grammar: GrammarRegistry,
}

impl CommandParser {
    /// Creates a parser over the given grammar.
    #[must_use]
    pub fn new(grammar: GrammarRegistry) -> Self {
        Self { grammar }
    }

    /// The grammar this parser resolves against.
    #[must_use]
    pub const fn grammar(&self) -> &GrammarRegistry {
        &self.grammar
    }

    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or decoding failure. The error carries the
    /// input line and the command path resolved so far.
    pub fn parse(&self, line: &str) -> Result<ResolvedCommand> {
        let mut path = Vec::new();
        match self.resolve_line(line, &mut path) {
            Ok(args) => {
                let resolved = ResolvedCommand::new(path, args);
                debug!(command = %resolved.path(), args = resolved.args().len(), "resolved command");
                Ok(resolved)
            }
            Err(err) => {
                trace!(input = line, error = %err, "failed to resolve command");
                Err(err.with_context(ErrorContext::new().with_input(line).with_path(path)))
            }
        }
    }

    fn resolve_line(&self, line: &str, path: &mut Vec<String>) -> Result<Vec<Value>> {
        let (head, rest) = split_head(line);
        if head.is_empty() {
            return Err(Error::new(ErrorKind::EmptyInput));
        }
        let def = self
            .grammar
            .lookup(head)
            .ok_or_else(|| Error::unknown_command(head))?;
        self.resolve(def, rest, path)
    }

    fn resolve(&self, def: &CommandDef, rest: &str, path: &mut Vec<String>) -> Result<Vec<Value>> {
        path.push(def.name().to_string());
        trace!(path = %path.join(" "), rest, "resolving");

        match def.node() {
            CommandNode::Branch(children) => {
                let (word, sub_rest) = split_head(rest);
                if word.is_empty() {
                    return Err(Error::missing_subcommand(path.join(" ")));
                }
                let child = children
                    .get(word)
                    .ok_or_else(|| Error::unknown_subcommand(path.join(" "), word))?;
                self.resolve(child, sub_rest, path)
            }
            CommandNode::Leaf(params) => self.decode_leaf(params, rest, path),
        }
    }

    fn decode_leaf(&self, params: &ParamSpec, rest: &str, path: &[String]) -> Result<Vec<Value>> {
        if params.is_continued() {
            return self.decode_continued(&params.types()[0], rest);
        }
        if params.is_passthrough() {
            return Ok(vec![Value::from(passthrough_text(rest))]);
        }

        let mut cursor = ArgCursor::new(rest);
        let mut args = Vec::with_capacity(params.types().len());

        for (position, ty) in params.types().iter().enumerate() {
            let value = match ty {
                ParamType::String if cursor.at_quote() => Value::from(cursor.next_quoted()?),
                ParamType::String => cursor
                    .next_word()
                    .map(Value::from)
                    .ok_or_else(|| Error::missing_argument(ty.clone(), position))?,
                ParamType::Point3 => Value::Point(take_point(&mut cursor)?),
                _ => {
                    let word = cursor.next_word().unwrap_or_default();
                    self.grammar.decoders().decode_word(ty, word)?
                }
            };
            args.push(value);
        }

        if !cursor.is_exhausted() {
            return Err(Error::trailing_arguments(path.join(" "), cursor.remaining()));
        }
        Ok(args)
    }

    fn decode_continued(&self, ty: &ParamType, rest: &str) -> Result<Vec<Value>> {
        if *ty == ParamType::Point3 {
            return Ok(scan_points(rest).into_iter().map(Value::Point).collect());
        }
        rest.split_whitespace()
            .map(|word| self.grammar.decoders().decode_word(ty, word))
            .collect()
    }
}

/// Text of a lone string parameter.
///
/// The remaining text is taken whole. If it is exactly one quoted string the
/// enclosing quotes are removed.
fn passthrough_text(rest: &str) -> &str {
    let text = rest.trim();
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .filter(|inner| !inner.contains('"'))
        .unwrap_or(text)
}
