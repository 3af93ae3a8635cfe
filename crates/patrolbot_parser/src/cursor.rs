//! Input cursor.
//!
//! Walks the argument text of a command one parameter at a time. The text is
//! kept trimmed at both edges after every step.

use patrolbot_foundation::{Error, Result};

/// Quote character that opens and closes a string argument.
pub const QUOTE: char = '"';

/// Splits `input` on its first whitespace run.
///
/// Leading whitespace is ignored. The second half is empty when there is no
/// whitespace after the head word.
#[must_use]
pub fn split_head(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

/// A cursor over the unconsumed argument text of one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgCursor<'a> {
    rest: &'a str,
}

impl<'a> ArgCursor<'a> {
    /// Creates a cursor over `input`, trimmed at both edges.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { rest: input.trim() }
    }

    /// Returns the unconsumed text.
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Returns true if no non-whitespace text remains.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns true if the remaining text opens a quoted string.
    #[must_use]
    pub fn at_quote(&self) -> bool {
        self.rest.starts_with(QUOTE)
    }

    /// Consumes one bare word, up to the next whitespace run.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn next_word(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (word, rest) = split_head(self.rest);
        self.rest = rest.trim_end();
        Some(word)
    }

    /// Consumes a quoted string and returns its contents without the quotes.
    ///
    /// # Errors
    ///
    /// Returns `UnterminatedString` if there is no closing quote.
    pub fn next_quoted(&mut self) -> Result<&'a str> {
        debug_assert!(self.at_quote());
        let body = &self.rest[QUOTE.len_utf8()..];
        let Some(end) = body.find(QUOTE) else {
            return Err(Error::unterminated_string(self.rest));
        };
        let contents = &body[..end];
        self.rest = body[end + QUOTE.len_utf8()..].trim();
        Ok(contents)
    }

    /// Skips `len` bytes of the remaining text.
    ///
    /// `len` must fall on a character boundary.
    pub fn advance(&mut self, len: usize) {
        self.rest = self.rest[len..].trim();
    }
}
