//! The interactive console.
//!
//! Each line typed at the console is delivered to the session as a chat
//! message from the configured operator. Lines starting with `.` are console
//! commands that stand in for the navigation layer.

use std::io::BufRead;

use patrolbot_foundation::{Point3, Result};
use patrolbot_parser::decoder::parse_point;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{PatrolSession, Reply};

/// What the console should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// Print these lines and keep going.
    Continue(Vec<String>),
    /// Leave the console.
    Quit,
}

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The chat session.
    session: PatrolSession,

    /// Chat name used for console lines.
    operator: String,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: PatrolSession, history_size: usize) -> Result<Self> {
        let editor = RustylineEditor::new(history_size)?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new console with the given editor.
    pub fn with_editor(mut editor: E, session: PatrolSession) -> Self {
        editor.set_grammar(session.parser().grammar().clone());
        Self {
            editor,
            session,
            operator: "console".to_string(),
            show_banner: true,
            prompt: "patrol> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the chat name used for console lines.
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &PatrolSession {
        &self.session
    }

    /// Runs the console loop until EOF or `.quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval_line(&line) {
                ConsoleOutcome::Continue(output) => {
                    for out in output {
                        println!("{out}");
                    }
                }
                ConsoleOutcome::Quit => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Feeds every line of `input` through the console without an editor.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run_batch(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.eval_line(&line) {
                ConsoleOutcome::Continue(output) => {
                    for out in output {
                        println!("{out}");
                    }
                }
                ConsoleOutcome::Quit => break,
            }
        }
        Ok(())
    }

    /// Evaluates one console line.
    pub fn eval_line(&mut self, line: &str) -> ConsoleOutcome {
        let trimmed = line.trim();
        let Some(meta) = trimmed.strip_prefix('.') else {
            let replies = self.session.handle_chat(&self.operator, line);
            return ConsoleOutcome::Continue(self.format_replies(&replies));
        };

        let (name, rest) = patrolbot_parser::cursor::split_head(meta);
        let output = match name {
            "quit" | "exit" => return ConsoleOutcome::Quit,
            "help" => vec![HELP.to_string()],
            "arrive" => {
                let replies = self.session.goal_reached();
                self.format_replies(&replies)
            }
            "pos" => match parse_point(rest.trim()) {
                Some(position) => {
                    let replies = self.session.report_position(position);
                    self.format_replies(&replies)
                }
                None => vec!["usage: .pos (x,y,z)".to_string()],
            },
            "goal" => vec![describe_goal(self.session.current_goal())],
            "status" => self.status(),
            "commands" => self
                .session
                .parser()
                .grammar()
                .leaves()
                .into_iter()
                .map(|(path, params)| {
                    let types: Vec<String> =
                        params.types().iter().map(ToString::to_string).collect();
                    if params.is_continued() {
                        format!("{path} {}...", types.join(" "))
                    } else {
                        format!("{path} {}", types.join(" ")).trim_end().to_string()
                    }
                })
                .collect(),
            other => vec![format!("unknown console command: .{other} (try .help)")],
        };
        ConsoleOutcome::Continue(output)
    }

    fn status(&self) -> Vec<String> {
        let state = self.session.state();
        let points: Vec<String> = state.points.iter().map(ToString::to_string).collect();
        vec![
            format!("route: {}", state.route_name.as_deref().unwrap_or("-")),
            format!("points: {}", points.join(" ")),
            format!("patrolling: {} (index {})", state.patrolling, state.index),
            format!("radius: {}, looping: {}", state.arrival_radius, state.looping),
            describe_goal(self.session.current_goal()),
        ]
    }

    fn format_replies(&self, replies: &[Reply]) -> Vec<String> {
        let name = self.session.username();
        replies
            .iter()
            .map(|reply| match reply {
                Reply::Chat(text) => format!("<{name}> {text}"),
                Reply::Command(_) => format!("\x1b[36m{reply}\x1b[0m"),
                Reply::Error(_) => format!("\x1b[31m{reply}\x1b[0m"),
            })
            .collect()
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1mpatrolbot\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!("Type chat commands (e.g. patrol set (1,64,1) (10,64,1)), .help for console commands, Ctrl+D to exit.");
        println!();
    }
}

fn describe_goal(goal: Option<Point3>) -> String {
    match goal {
        Some(point) => format!("goal: {point}"),
        None => "goal: -".to_string(),
    }
}

const HELP: &str = "\
console commands:
  .arrive        mark the current goal as reached
  .pos (x,y,z)   report the bot's position
  .goal          show the current goal
  .status        show the patrol state
  .commands      list the grammar
  .quit          leave the console";
