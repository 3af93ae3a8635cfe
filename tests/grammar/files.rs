//! TOML grammar files.

use patrolbot_foundation::{ErrorKind, ParamType, Point3, Value};
use patrolbot_parser::grammar_file::parse_grammar;
use patrolbot_parser::{CommandParser, GrammarRegistry, standard_grammar};

const GRAMMAR: &str = r#"
[[command]]
name = "guard"

  [[command.subcommand]]
  name = "post"
  params = ["point3", "float"]

  [[command.subcommand]]
  name = "relieve"

[[command]]
name = "waypoints"
params = ["point3"]
continued = true
"#;

#[test]
fn file_commands_parse() {
    let mut grammar = GrammarRegistry::new();
    assert_eq!(grammar.extend_from_toml(GRAMMAR).unwrap(), 2);

    let parser = CommandParser::new(grammar);
    let cmd = parser.parse("guard post (5,64,5) 3").unwrap();
    assert_eq!(cmd.path(), "guard post");
    assert_eq!(
        cmd.args(),
        &[Value::Point(Point3::new(5.0, 64.0, 5.0)), Value::Float(3.0)]
    );

    let cmd = parser.parse("waypoints (1,1,1) (2,2,2)").unwrap();
    assert_eq!(cmd.points().len(), 2);
}

#[test]
fn file_overrides_standard_command() {
    let mut grammar = standard_grammar();
    grammar
        .extend_from_toml(
            r#"
[[command]]
name = "goto"
params = ["int", "int"]
"#,
        )
        .unwrap();

    let parser = CommandParser::new(grammar);
    let cmd = parser.parse("goto 4 5").unwrap();
    assert_eq!(cmd.args(), &[Value::Int(4), Value::Int(5)]);
}

#[test]
fn type_aliases_in_files() {
    let defs = parse_grammar(
        r#"
[[command]]
name = "mark"
params = ["vec3", "boolean"]
"#,
    )
    .unwrap();
    assert_eq!(
        defs[0].params().unwrap().types(),
        &[ParamType::Point3, ParamType::Bool]
    );
}

#[test]
fn rejects_params_with_subcommands() {
    let err = parse_grammar(
        r#"
[[command]]
name = "bad"
params = ["int"]

  [[command.subcommand]]
  name = "child"
"#,
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Grammar(_)));
}

#[test]
fn rejects_continued_without_single_param() {
    let err = parse_grammar(
        r#"
[[command]]
name = "bad"
params = ["int", "int"]
continued = true
"#,
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Grammar(_)));
}

#[test]
fn rejects_unknown_keys() {
    assert!(parse_grammar("[[command]]\nname = \"x\"\naliases = [\"y\"]\n").is_err());
}

#[test]
fn invalid_source_registers_nothing() {
    let mut grammar = GrammarRegistry::new();
    assert!(grammar.extend_from_toml("[[command]]\nname = \"\"\n").is_err());
    assert!(grammar.is_empty());
}

#[test]
fn missing_file_reports_path() {
    let mut grammar = GrammarRegistry::new();
    let err = grammar
        .extend_from_file(std::path::Path::new("/nonexistent/grammar.toml"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(
        err.context.unwrap().source.as_deref(),
        Some("/nonexistent/grammar.toml")
    );
}
