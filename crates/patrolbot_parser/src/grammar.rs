//! Grammar registry.
//!
//! Stores the command tree: top-level command definitions keyed by name,
//! each either a leaf with parameter types or a branch of subcommands.

use std::collections::HashMap;
use std::sync::Arc;

use patrolbot_foundation::{Error, ParamType, Result};
use tracing::debug;

use crate::decoder::{DecoderRegistry, ScalarDecoder};

/// Parameter list of a leaf command.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ParamSpec {
    types: Vec<ParamType>,
    continued: bool,
}

impl ParamSpec {
    /// Creates a fixed, ordered parameter list.
    #[must_use]
    pub fn new(types: impl IntoIterator<Item = ParamType>) -> Self {
        Self {
            types: types.into_iter().collect(),
            continued: false,
        }
    }

    /// Creates a list that applies `ty` repeatedly until input runs out.
    #[must_use]
    pub fn continued(ty: ParamType) -> Self {
        Self {
            types: vec![ty],
            continued: true,
        }
    }

    /// Declared parameter types, in order.
    #[must_use]
    pub fn types(&self) -> &[ParamType] {
        &self.types
    }

    /// Whether the single declared type repeats.
    #[must_use]
    pub const fn is_continued(&self) -> bool {
        self.continued
    }

    /// Returns true if this is a lone `string` parameter, which takes the
    /// whole remaining text verbatim.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        !self.continued && self.types == [ParamType::String]
    }
}

/// The shape of a grammar node.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandNode {
    /// Terminal command with its parameters.
    Leaf(ParamSpec),
    /// Command that defers to one of its named children.
    Branch(HashMap<String, CommandDef>),
}

/// A named node in the command tree.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandDef {
    name: String,
    node: CommandNode,
}

impl CommandDef {
    /// Creates a leaf command with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: CommandNode::Leaf(ParamSpec::default()),
        }
    }

    /// Creates a leaf command with the given parameter types.
    #[must_use]
    pub fn leaf(name: impl Into<String>, types: impl IntoIterator<Item = ParamType>) -> Self {
        Self::with_params(name, ParamSpec::new(types))
    }

    /// Creates a leaf command whose single parameter type repeats.
    #[must_use]
    pub fn continued(name: impl Into<String>, ty: ParamType) -> Self {
        Self::with_params(name, ParamSpec::continued(ty))
    }

    /// Creates a leaf command from a parameter list.
    #[must_use]
    pub fn with_params(name: impl Into<String>, params: ParamSpec) -> Self {
        Self {
            name: name.into(),
            node: CommandNode::Leaf(params),
        }
    }

    /// Attaches a subcommand and returns `self` for chaining.
    #[must_use]
    pub fn with_subcommand(mut self, child: CommandDef) -> Self {
        self.attach_subcommand(child);
        self
    }

    /// Inserts `child` under its name, replacing any child of the same name.
    ///
    /// A leaf becomes a branch on its first attachment; its parameters are
    /// discarded.
    pub fn attach_subcommand(&mut self, child: CommandDef) -> &mut Self {
        if let CommandNode::Leaf(params) = &self.node {
            if !params.types().is_empty() {
                debug!(
                    command = %self.name,
                    "dropping leaf parameters on first subcommand attachment"
                );
            }
            self.node = CommandNode::Branch(HashMap::new());
        }
        if let CommandNode::Branch(children) = &mut self.node {
            if children.insert(child.name.clone(), child).is_some() {
                debug!(command = %self.name, "replaced existing subcommand");
            }
        }
        self
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node shape.
    #[must_use]
    pub const fn node(&self) -> &CommandNode {
        &self.node
    }

    /// Returns true if this command has subcommands.
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self.node, CommandNode::Branch(_))
    }

    /// Leaf parameters, or `None` for a branch.
    #[must_use]
    pub const fn params(&self) -> Option<&ParamSpec> {
        match &self.node {
            CommandNode::Leaf(params) => Some(params),
            CommandNode::Branch(_) => None,
        }
    }

    /// Looks up a direct subcommand by exact name.
    #[must_use]
    pub fn subcommand(&self, name: &str) -> Option<&CommandDef> {
        match &self.node {
            CommandNode::Branch(children) => children.get(name),
            CommandNode::Leaf(_) => None,
        }
    }

    /// Names of the direct subcommands, sorted.
    #[must_use]
    pub fn subcommand_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = match &self.node {
            CommandNode::Branch(children) => children.keys().map(String::as_str).collect(),
            CommandNode::Leaf(_) => Vec::new(),
        };
        names.sort_unstable();
        names
    }

    /// Visits every leaf below this node with its full path.
    fn collect_leaves<'a>(&'a self, prefix: &mut Vec<&'a str>, out: &mut Vec<(String, &'a ParamSpec)>) {
        prefix.push(&self.name);
        match &self.node {
            CommandNode::Leaf(params) => out.push((prefix.join(" "), params)),
            CommandNode::Branch(children) => {
                for child in children.values() {
                    child.collect_leaves(prefix, out);
                }
            }
        }
        prefix.pop();
    }
}

/// Runtime storage for the command grammar.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct GrammarRegistry {
    commands: HashMap<String, CommandDef>,
    decoders: DecoderRegistry,
}

impl GrammarRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a top-level command, replacing any command with the same
    /// name. Returns the replaced definition.
    pub fn register(&mut self, def: CommandDef) -> Option<CommandDef> {
        let previous = self.commands.insert(def.name.clone(), def);
        if let Some(prev) = &previous {
            debug!(command = %prev.name, "replaced existing command definition");
        }
        previous
    }

    /// Registers a command and returns `self` for chaining.
    #[must_use]
    pub fn with_command(mut self, def: CommandDef) -> Self {
        self.register(def);
        self
    }

    /// Registers a decoder for a custom scalar type.
    pub fn register_decoder(&mut self, name: impl Into<Arc<str>>, decoder: ScalarDecoder) {
        self.decoders.register(name, decoder);
    }

    /// Looks up a top-level command by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(name)
    }

    /// The custom scalar decoders.
    #[must_use]
    pub const fn decoders(&self) -> &DecoderRegistry {
        &self.decoders
    }

    /// Top-level command names, sorted.
    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every leaf command with its space-joined path, sorted by path.
    #[must_use]
    pub fn leaves(&self) -> Vec<(String, &ParamSpec)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        for def in self.commands.values() {
            def.collect_leaves(&mut prefix, &mut out);
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Number of top-level commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Checks that every custom parameter type has a decoder.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` naming the first leaf with an undecodable type.
    pub fn validate(&self) -> Result<()> {
        for (path, params) in self.leaves() {
            for ty in params.types() {
                if let ParamType::Custom(name) = ty {
                    if !self.decoders.contains(name) {
                        return Err(Error::unknown_type(format!("{name} (in `{path}`)")));
                    }
                }
            }
        }
        Ok(())
    }
}
