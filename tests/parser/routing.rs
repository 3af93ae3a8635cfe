//! Head word lookup and subcommand descent.

use crate::parser;
use patrolbot_foundation::ErrorKind;

#[test]
fn no_param_leaf_resolves_to_its_name() {
    let parser = parser();
    for name in ["ping", "startPatrol", "stopPatrol"] {
        let cmd = parser.parse(name).unwrap();
        assert_eq!(cmd.path(), name);
        assert!(cmd.args().is_empty());
    }
}

#[test]
fn no_param_leaf_rejects_trailing_text() {
    let parser = parser();
    for name in ["ping", "startPatrol", "stopPatrol"] {
        let err = parser.parse(&format!("{name} now")).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::TrailingArguments { ref remaining, .. } if remaining == "now"),
            "{name}: {err}"
        );
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let cmd = parser().parse("   patrol    stop   ").unwrap();
    assert_eq!(cmd.path(), "patrol stop");
}

#[test]
fn subcommands_route() {
    let parser = parser();
    for sub in ["start", "stop"] {
        let cmd = parser.parse(&format!("patrol {sub}")).unwrap();
        assert_eq!(cmd.path(), format!("patrol {sub}"));
        assert_eq!(cmd.segments(), &["patrol".to_string(), sub.to_string()]);
        assert!(cmd.args().is_empty());
    }
}

#[test]
fn path_matching_helper() {
    let cmd = parser().parse("patrol stop").unwrap();
    assert!(cmd.is("patrol stop"));
    assert!(!cmd.is("patrol"));
}

#[test]
fn unknown_subcommand() {
    let err = parser().parse("patrol unknown").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnknownSubcommand { ref command, ref name }
            if command == "patrol" && name == "unknown"
    ));
}

#[test]
fn missing_subcommand() {
    for line in ["patrol", "patrol   "] {
        let err = parser().parse(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingSubcommand { ref command } if command == "patrol"));
    }
}

#[test]
fn subcommands_take_priority_over_parameters() {
    let err = parser().parse("patrol (1,2,3)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSubcommand { .. }));
}

#[test]
fn unknown_command() {
    let err = parser().parse("dance now").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(ref name) if name == "dance"));
}

#[test]
fn command_names_are_case_sensitive() {
    let err = parser().parse("Patrol stop").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
}

#[test]
fn empty_grammar_knows_nothing() {
    let err = crate::empty_parser().parse("patrol stop").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
}
