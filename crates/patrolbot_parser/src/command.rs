//! Resolved commands.

use std::fmt;

use patrolbot_foundation::{Point3, Value};

/// A command line resolved against the grammar.
///
/// Holds the path of names from the top-level command down to the matched
/// leaf, and the decoded arguments in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCommand {
    path: Vec<String>,
    args: Vec<Value>,
}

impl ResolvedCommand {
    /// Creates a resolved command.
    #[must_use]
    pub fn new(path: Vec<String>, args: Vec<Value>) -> Self {
        Self { path, args }
    }

    /// The space-joined command path, e.g. `"patrol stop"`.
    #[must_use]
    pub fn path(&self) -> String {
        self.path.join(" ")
    }

    /// The individual path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Returns true if the path equals `path` (space-joined).
    #[must_use]
    pub fn is(&self, path: &str) -> bool {
        self.path
            .iter()
            .map(String::as_str)
            .eq(path.split(' ').filter(|s| !s.is_empty()))
    }

    /// The decoded arguments.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The argument at `index`, if any.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// The string argument at `index`.
    #[must_use]
    pub fn str_arg(&self, index: usize) -> Option<&str> {
        self.arg(index).and_then(Value::as_str)
    }

    /// The boolean argument at `index`.
    #[must_use]
    pub fn bool_arg(&self, index: usize) -> Option<bool> {
        self.arg(index).and_then(Value::as_bool)
    }

    /// The numeric argument at `index`, widened to f64.
    #[must_use]
    pub fn number_arg(&self, index: usize) -> Option<f64> {
        self.arg(index).and_then(Value::as_number)
    }

    /// Every point argument, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        self.args.iter().filter_map(Value::as_point).collect()
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())?;
        for arg in &self.args {
            write!(f, " {arg:?}")?;
        }
        Ok(())
    }
}
