//! Parameter type tags declared by command grammars.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Type tag for one positional command parameter.
///
/// Built-in tags have dedicated decoders. Any other name is a custom scalar,
/// decoded from a single bare word by a decoder registered under that name.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ParamType {
    /// Quoted string or bare word.
    String,
    /// Truthy/falsy word. Never fails to decode.
    Bool,
    /// 64-bit signed integer literal.
    Int,
    /// 64-bit floating point literal.
    Float,
    /// Parenthesized `(x,y,z)` coordinate triple.
    Point3,
    /// Named custom scalar.
    Custom(Arc<str>),
}

impl ParamType {
    /// Creates a custom scalar type tag.
    #[must_use]
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }

    /// Returns the canonical name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Point3 => "point3",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Debug for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(name) => write!(f, "custom<{name}>"),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "" => Err(Error::grammar("empty parameter type name")),
            "string" | "str" => Ok(Self::String),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Int),
            "float" | "number" => Ok(Self::Float),
            "point3" | "vec3" => Ok(Self::Point3),
            _ if name.chars().any(char::is_whitespace) => Err(Error::grammar(format!(
                "parameter type name contains whitespace: {name:?}"
            ))),
            _ => Ok(Self::custom(name)),
        }
    }
}

impl TryFrom<String> for ParamType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParamType> for String {
    fn from(value: ParamType) -> Self {
        value.name().to_string()
    }
}
