//! Per-type argument decoders.
//!
//! Built-in types decode here directly. Custom scalar types are looked up by
//! name in a [`DecoderRegistry`].
//!
//! Coordinates use one literal grammar everywhere: an optional `-`, digits,
//! and an optional fractional part. Points are written `(x,y,z)` with no
//! whitespace inside the parentheses.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use patrolbot_foundation::{Error, ParamType, Point3, Result, Value};
use regex::Regex;

use crate::cursor::ArgCursor;

const COORD: &str = r"(-?\d+(?:\.\d+)?)";

/// A point at the start of the text.
static POINT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\({COORD},{COORD},{COORD}\)")).expect("valid point pattern")
});

/// A point spanning the whole text.
static POINT_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\({COORD},{COORD},{COORD}\)$")).expect("valid point pattern")
});

/// A point anywhere in the text.
static POINT_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\({COORD},{COORD},{COORD}\)")).expect("valid point pattern")
});

/// Decodes a custom scalar from a single bare word.
///
/// Returns `None` if the word is not a valid literal of the type.
pub type ScalarDecoder = fn(&str) -> Option<Value>;

/// Named decoders for custom scalar parameter types.
#[derive(Clone, Debug, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<Arc<str>, ScalarDecoder>,
}

impl DecoderRegistry {
    /// Creates an empty decoder registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoder, replacing any previous decoder with the same name.
    pub fn register(&mut self, name: impl Into<Arc<str>>, decoder: ScalarDecoder) {
        self.decoders.insert(name.into(), decoder);
    }

    /// Looks up a decoder by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ScalarDecoder> {
        self.decoders.get(name).copied()
    }

    /// Returns true if a decoder is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.decoders.contains_key(name)
    }

    /// Decodes one bare word as the given type.
    ///
    /// Strings pass through verbatim and booleans never fail.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLiteral` if a numeric or custom word fails conversion,
    /// `InvalidPoint` for a malformed point, and `UnknownType` for a custom
    /// type with no registered decoder.
    pub fn decode_word(&self, ty: &ParamType, word: &str) -> Result<Value> {
        match ty {
            ParamType::String => Ok(Value::from(word)),
            ParamType::Bool => Ok(Value::Bool(decode_bool(word))),
            ParamType::Int => word
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::invalid_literal(ty.clone(), word)),
            ParamType::Float => word
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::invalid_literal(ty.clone(), word)),
            ParamType::Point3 => parse_point(word)
                .map(Value::Point)
                .ok_or_else(|| Error::invalid_point(word)),
            ParamType::Custom(name) => {
                let decoder = self.get(name).ok_or_else(|| Error::unknown_type(&**name))?;
                decoder(word).ok_or_else(|| Error::invalid_literal(ty.clone(), word))
            }
        }
    }
}

/// Interprets a word as a boolean.
///
/// `true`, `yes` and `1` (any case) are true; every other word is false.
#[must_use]
pub fn decode_bool(word: &str) -> bool {
    ["true", "yes", "1"]
        .iter()
        .any(|truthy| word.eq_ignore_ascii_case(truthy))
}

/// Parses text that is exactly one `(x,y,z)` group.
#[must_use]
pub fn parse_point(text: &str) -> Option<Point3> {
    POINT_EXACT.captures(text).and_then(|caps| {
        let coord = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();
        Some(Point3::new(coord(1)?, coord(2)?, coord(3)?))
    })
}

/// Consumes a point from the front of the cursor.
///
/// # Errors
///
/// Returns `InvalidPoint` if the remaining text does not begin with a
/// well-formed `(x,y,z)` group.
pub fn take_point(cursor: &mut ArgCursor<'_>) -> Result<Point3> {
    let text = cursor.remaining();
    let span = POINT_PREFIX
        .find(text)
        .ok_or_else(|| Error::invalid_point(text))?;
    let point = parse_point(span.as_str()).ok_or_else(|| Error::invalid_point(text))?;
    cursor.advance(span.end());
    Ok(point)
}

/// Extracts every well-formed point from `text`, left to right.
///
/// Text that is not part of an `(x,y,z)` group is skipped, including stray
/// parentheses and malformed groups.
#[must_use]
pub fn scan_points(text: &str) -> Vec<Point3> {
    POINT_ANY
        .find_iter(text)
        .filter_map(|group| parse_point(group.as_str()))
        .collect()
}
