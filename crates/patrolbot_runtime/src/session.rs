//! Chat session for the patrol bot.
//!
//! The session receives chat messages, resolves them with the command parser
//! and updates the patrol state. It never moves the bot itself: navigation is
//! done by whoever reads [`PatrolSession::current_goal`] and reports back
//! through [`PatrolSession::goal_reached`] or
//! [`PatrolSession::report_position`].

use std::fmt;

use patrolbot_foundation::{Point3, Result};
use patrolbot_parser::{CommandParser, ResolvedCommand};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;

/// Something the session wants sent back out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A chat line to say.
    Chat(String),
    /// A raw server command to forward to the transport.
    Command(String),
    /// A user-facing error message.
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat(text) => write!(f, "{text}"),
            Self::Command(text) => write!(f, "> {text}"),
            Self::Error(text) => write!(f, "error: {text}"),
        }
    }
}

/// Current patrol route and progress.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolState {
    /// Route name from `setPatrol`, if any.
    pub route_name: Option<String>,
    /// Patrol points in visiting order.
    pub points: Vec<Point3>,
    /// Whether a patrol is in progress.
    pub patrolling: bool,
    /// Index of the point currently being approached.
    pub index: usize,
    /// Distance at which a point counts as reached.
    pub arrival_radius: f64,
    /// Whether the patrol wraps after the last point.
    pub looping: bool,
    /// One-off destination from `goto`, outside of a patrol.
    pub destination: Option<Point3>,
    /// Facing direction from `face`.
    pub facing: Option<String>,
}

impl PatrolState {
    fn new(config: &RuntimeConfig) -> Self {
        Self {
            route_name: None,
            points: Vec::new(),
            patrolling: false,
            index: 0,
            arrival_radius: config.arrival_radius,
            looping: config.loop_patrol,
            destination: None,
            facing: None,
        }
    }
}

/// Chat-driven patrol controller.
#[derive(Debug)]
pub struct PatrolSession {
    parser: CommandParser,
    username: String,
    state: PatrolState,
}

impl PatrolSession {
    /// Creates a session with the given parser and configuration.
    #[must_use]
    pub fn new(parser: CommandParser, config: &RuntimeConfig) -> Self {
        Self {
            parser,
            username: config.username.clone(),
            state: PatrolState::new(config),
        }
    }

    /// The bot's own chat name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The command parser.
    #[must_use]
    pub const fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// The patrol state.
    #[must_use]
    pub const fn state(&self) -> &PatrolState {
        &self.state
    }

    /// The point the bot should currently be moving to, if any.
    #[must_use]
    pub fn current_goal(&self) -> Option<Point3> {
        if self.state.patrolling {
            self.state.points.get(self.state.index).copied()
        } else {
            self.state.destination
        }
    }

    /// Handles one chat message.
    ///
    /// Empty messages and the bot's own messages are ignored. Parse failures
    /// become a single [`Reply::Error`].
    pub fn handle_chat(&mut self, username: &str, message: &str) -> Vec<Reply> {
        if username == self.username || message.trim().is_empty() {
            return Vec::new();
        }

        match self.parser.parse(message) {
            Ok(cmd) => {
                info!(user = username, command = %cmd, "chat command");
                self.dispatch(&cmd)
            }
            Err(err) => {
                debug!(user = username, error = %err, context = ?err.context, "rejected chat command");
                vec![Reply::Error(err.to_string())]
            }
        }
    }

    fn dispatch(&mut self, cmd: &ResolvedCommand) -> Vec<Reply> {
        match cmd.path().as_str() {
            "patrol set" => self.set_points(cmd.points()),
            "patrol start" | "startPatrol" => self.start(),
            "patrol stop" | "stopPatrol" => self.stop(),
            "patrol config" => self.configure(cmd),
            "setPatrol" => self.set_route(cmd),
            "goto" => self.goto(cmd),
            "face" => self.face(cmd),
            "cmdout" => match cmd.str_arg(0) {
                Some(text) => vec![Reply::Command(text.to_string())],
                None => unexpected_args(cmd, "a command line"),
            },
            "say" => match cmd.str_arg(0) {
                Some(text) => vec![Reply::Chat(text.to_string())],
                None => unexpected_args(cmd, "a message"),
            },
            other => {
                warn!(command = other, "no handler for command");
                vec![Reply::Error(format!("no handler for `{other}`"))]
            }
        }
    }

    fn set_points(&mut self, points: Vec<Point3>) -> Vec<Reply> {
        if points.is_empty() {
            return vec![Reply::Error(
                "no valid patrol points given; use 'patrol set (x,y,z) ...'".to_string(),
            )];
        }

        let listed = points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        info!(count = points.len(), "patrol points set");

        self.state.points = points;
        self.state.index = 0;
        let mut replies = vec![Reply::Chat(format!("Patrol points set: {listed}"))];
        if self.state.patrolling {
            replies.extend(self.announce_goal());
        }
        replies
    }

    fn start(&mut self) -> Vec<Reply> {
        if self.state.points.is_empty() {
            return vec![Reply::Chat(
                "No patrol points set. Use 'patrol set (x,y,z) ...' to set points.".to_string(),
            )];
        }

        self.state.patrolling = true;
        self.state.index = 0;
        self.state.destination = None;
        info!(points = self.state.points.len(), "patrol started");

        let mut replies = vec![Reply::Chat("Starting patrol...".to_string())];
        replies.extend(self.announce_goal());
        replies
    }

    fn stop(&mut self) -> Vec<Reply> {
        self.state.patrolling = false;
        self.state.destination = None;
        info!("patrol stopped");
        vec![Reply::Chat("Stopping patrol.".to_string())]
    }

    fn configure(&mut self, cmd: &ResolvedCommand) -> Vec<Reply> {
        let radius = cmd.number_arg(0).unwrap_or(self.state.arrival_radius);
        if !(radius.is_finite() && radius > 0.0) {
            return vec![Reply::Error(format!(
                "arrival radius must be positive, got {radius}"
            ))];
        }

        self.state.arrival_radius = radius;
        self.state.looping = cmd.bool_arg(1).unwrap_or(self.state.looping);
        vec![Reply::Chat(format!(
            "Patrol config: radius {radius}, looping {}",
            self.state.looping
        ))]
    }

    /// `setPatrol <name> <loop> <autostart>`
    fn set_route(&mut self, cmd: &ResolvedCommand) -> Vec<Reply> {
        let name = cmd.str_arg(0).unwrap_or_default().to_string();
        self.state.looping = cmd.bool_arg(1).unwrap_or(self.state.looping);
        let autostart = cmd.bool_arg(2).unwrap_or(false);

        let mut replies = vec![Reply::Chat(format!(
            "Route set: {name} (looping {})",
            self.state.looping
        ))];
        self.state.route_name = Some(name);
        if autostart {
            replies.extend(self.start());
        }
        replies
    }

    fn goto(&mut self, cmd: &ResolvedCommand) -> Vec<Reply> {
        let Some(point) = cmd.points().first().copied() else {
            return unexpected_args(cmd, "a point");
        };
        self.state.patrolling = false;
        self.state.destination = Some(point);
        vec![Reply::Chat(format!("Moving to point: {point}"))]
    }

    fn face(&mut self, cmd: &ResolvedCommand) -> Vec<Reply> {
        let Some(direction) = cmd.str_arg(0) else {
            return unexpected_args(cmd, "a direction");
        };
        self.state.facing = Some(direction.to_string());
        vec![Reply::Chat(format!("Facing {direction}"))]
    }

    fn announce_goal(&self) -> Option<Reply> {
        self.current_goal()
            .map(|goal| Reply::Chat(format!("Moving to point: {goal}")))
    }

    /// Marks the current goal as reached and advances the patrol.
    pub fn goal_reached(&mut self) -> Vec<Reply> {
        if !self.state.patrolling {
            return match self.state.destination.take() {
                Some(point) => vec![Reply::Chat(format!("Reached point: {point}"))],
                None => Vec::new(),
            };
        }

        let Some(reached) = self.state.points.get(self.state.index).copied() else {
            self.state.patrolling = false;
            return Vec::new();
        };

        let mut replies = vec![Reply::Chat(format!("Reached point: {reached}"))];
        let next = self.state.index + 1;
        if next < self.state.points.len() {
            self.state.index = next;
        } else if self.state.looping {
            self.state.index = 0;
        } else {
            self.state.patrolling = false;
            self.state.index = 0;
            info!("patrol complete");
            replies.push(Reply::Chat("Patrol complete.".to_string()));
            return replies;
        }
        replies.extend(self.announce_goal());
        replies
    }

    /// Reports the bot's position; advances the patrol if the goal is within
    /// the arrival radius.
    pub fn report_position(&mut self, position: Point3) -> Vec<Reply> {
        match self.current_goal() {
            Some(goal) if goal.is_near(&position, self.state.arrival_radius) => self.goal_reached(),
            _ => Vec::new(),
        }
    }

    /// Parses a line without dispatching it.
    ///
    /// # Errors
    ///
    /// Returns the parse error unchanged.
    pub fn preview(&self, line: &str) -> Result<ResolvedCommand> {
        self.parser.parse(line)
    }
}

/// Reply for a command whose grammar no longer matches its handler.
fn unexpected_args(cmd: &ResolvedCommand, expected: &str) -> Vec<Reply> {
    warn!(command = %cmd, expected, "handler did not find its argument");
    vec![Reply::Error(format!(
        "`{}` expects {expected} as its first argument",
        cmd.path()
    ))]
}
