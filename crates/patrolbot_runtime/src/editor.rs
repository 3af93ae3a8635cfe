//! Line editor abstraction for the console.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the console to use rustyline while remaining swappable.

use patrolbot_foundation::{Error, ErrorKind, Result};
use patrolbot_parser::{CommandDef, GrammarRegistry};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the grammar used for tab completion.
    fn set_grammar(&mut self, grammar: GrammarRegistry);
}

/// Helper for rustyline that provides completion, hints, and prompt colouring.
#[derive(Helper, Completer, Hinter, Validator)]
struct ConsoleHelper {
    #[rustyline(Completer)]
    completer: GrammarCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ConsoleHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command and subcommand names from the grammar.
#[derive(Default)]
pub struct GrammarCompleter {
    grammar: GrammarRegistry,
}

impl GrammarCompleter {
    /// Creates a completer over the given grammar.
    #[must_use]
    pub fn new(grammar: GrammarRegistry) -> Self {
        Self { grammar }
    }

    /// Names that may follow the complete words in `line`, filtered by the
    /// partial word at its end.
    ///
    /// Returns the byte offset where the partial word starts.
    #[must_use]
    pub fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let partial_len: usize = line
            .chars()
            .rev()
            .take_while(|c| !c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        let start = line.len() - partial_len;
        let partial = &line[start..];
        let mut words = line[..start].split_whitespace();

        let names: Vec<&str> = match words.next() {
            None => self.grammar.command_names(),
            Some(head) => {
                let mut node: Option<&CommandDef> = self.grammar.lookup(head);
                for word in words {
                    node = node.and_then(|def| def.subcommand(word));
                }
                node.map(CommandDef::subcommand_names).unwrap_or_default()
            }
        };

        let matches = names
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect();
        (start, matches)
    }
}

impl Completer for GrammarCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(&line[..pos]);
        let candidates = names
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails or the history size
    /// is rejected.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(history_size)
            .map_err(|e| Error::new(ErrorKind::Config(e.to_string())))?
            .build();

        let helper = ConsoleHelper {
            completer: GrammarCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_grammar(&mut self, grammar: GrammarRegistry) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer = GrammarCompleter::new(grammar);
        }
    }
}
