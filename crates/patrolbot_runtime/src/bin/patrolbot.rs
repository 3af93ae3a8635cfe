//! patrolbot CLI entry point.

use patrolbot_parser::{CommandParser, GrammarRegistry, standard_grammar};
use patrolbot_runtime::{LineEditor, PatrolSession, ReadResult, Repl, RuntimeConfig, init_logging};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config: Option<PathBuf>,
    grammar: Option<PathBuf>,
    username: Option<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-c" | "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config.config = Some(PathBuf::from(value));
            }
            "-g" | "--grammar" => {
                let value = args.next().ok_or("--grammar requires a path")?;
                config.grammar = Some(PathBuf::from(value));
            }
            "-u" | "--username" => {
                let value = args.next().ok_or("--username requires a name")?;
                config.username = Some(value);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("patrolbot {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(grammar) = cli.grammar {
        config = config.with_grammar(grammar);
    }
    if let Some(username) = cli.username {
        config = config.with_username(username);
    }

    init_logging(&config.log_filter)?;

    let mut grammar = standard_grammar();
    if let Some(path) = &config.grammar {
        let added = grammar.extend_from_file(path)?;
        info!(path = %path.display(), commands = added, "loaded grammar file");
    }
    grammar.validate()?;

    let session = PatrolSession::new(CommandParser::new(grammar), &config);

    if cli.batch_mode {
        let mut repl = Repl::with_editor(NoEditor, session).with_operator(config.operator.clone());
        repl.run_batch(io::stdin().lock())?;
        return Ok(());
    }

    let mut repl = Repl::new(session, config.history_size)?
        .with_prompt(config.prompt.clone())
        .with_operator(config.operator.clone());
    repl.run()?;
    Ok(())
}

/// Editor stand-in for batch mode, where input comes from stdin.
struct NoEditor;

impl LineEditor for NoEditor {
    fn read_line(&mut self, _prompt: &str) -> patrolbot_foundation::Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_grammar(&mut self, _grammar: GrammarRegistry) {}
}

fn print_help() {
    println!(
        "\x1b[1mpatrolbot\x1b[0m - Chat-command patrol bot

\x1b[1mUSAGE:\x1b[0m
    patrolbot [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -c, --config PATH      Load runtime configuration from a TOML file
    -g, --grammar PATH     Merge extra commands from a TOML grammar file
    -u, --username NAME    Set the bot's chat name
    -b, --batch            Read chat lines from stdin and exit at EOF

\x1b[1mEXAMPLES:\x1b[0m
    patrolbot                          Start the interactive console
    patrolbot -g extra.toml            Add commands from extra.toml
    echo 'patrol set (1,64,1)' | patrolbot -b

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    patrol set (x,y,z) ...   Set patrol points
    patrol start | stop      Start or stop patrolling
    .arrive                  Mark the current goal as reached
    .status                  Show the patrol state
    .help                    List console commands
    Ctrl+D                   Exit"
    );
}
