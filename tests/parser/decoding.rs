//! Strict leaf decoding for each parameter type.

use crate::parser;
use patrolbot_foundation::{ErrorKind, Point3, Value};

// =============================================================================
// Points
// =============================================================================

#[test]
fn two_points_in_order() {
    let cmd = parser().parse("line (1,2,3) (4,5,6)").unwrap();
    assert_eq!(cmd.path(), "line");
    assert_eq!(
        cmd.args(),
        &[
            Value::Point(Point3::new(1.0, 2.0, 3.0)),
            Value::Point(Point3::new(4.0, 5.0, 6.0)),
        ]
    );
}

#[test]
fn decimal_and_negative_coordinates() {
    let cmd = parser().parse("goto (-10.5,64,0.25)").unwrap();
    assert_eq!(cmd.points(), vec![Point3::new(-10.5, 64.0, 0.25)]);
}

#[test]
fn point_must_be_exact_shape() {
    let parser = parser();
    for line in ["goto (1,2)", "goto (1, 2, 3)", "goto 1,2,3", "goto (a,b,c)", "goto"] {
        let err = parser.parse(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPoint { .. }), "{line}: {err}");
    }
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn lone_string_takes_whole_remainder() {
    let cmd = parser().parse("say hello   there, patrol").unwrap();
    assert_eq!(cmd.str_arg(0), Some("hello   there, patrol"));
}

#[test]
fn cmdout_quoted_payload() {
    let cmd = parser().parse("cmdout \"/tp @a @s\"").unwrap();
    assert_eq!(cmd.path(), "cmdout");
    assert_eq!(cmd.args(), &[Value::from("/tp @a @s")]);
}

#[test]
fn lone_string_keeps_inner_quotes() {
    let cmd = parser().parse("say she said \"hi\"").unwrap();
    assert_eq!(cmd.str_arg(0), Some("she said \"hi\""));
}

#[test]
fn quoted_string_then_more_params() {
    let cmd = parser().parse("setPatrol \"Main Gate\" yes no").unwrap();
    assert_eq!(
        cmd.args(),
        &[Value::from("Main Gate"), Value::Bool(true), Value::Bool(false)]
    );
}

#[test]
fn bare_word_string() {
    let cmd = parser().parse("label north 3").unwrap();
    assert_eq!(cmd.args(), &[Value::from("north"), Value::Int(3)]);
}

#[test]
fn unterminated_string() {
    let err = parser().parse("setPatrol \"Main Gate yes no").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnterminatedString { .. }));
}

#[test]
fn missing_string_argument() {
    let err = parser().parse("label").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingArgument { position: 0, .. }));
}

// =============================================================================
// Booleans and numbers
// =============================================================================

#[test]
fn booleans_are_case_insensitive() {
    let parser = parser();
    for word in ["True", "yes", "1", "YES", "tRuE"] {
        let cmd = parser.parse(&format!("setPatrol r {word} {word}")).unwrap();
        assert_eq!(cmd.bool_arg(1), Some(true), "{word}");
    }
}

#[test]
fn unrecognized_booleans_are_false() {
    let parser = parser();
    for word in ["no", "0", "false", "maybe", "y"] {
        let cmd = parser.parse(&format!("setPatrol r {word}")).unwrap();
        assert_eq!(cmd.bool_arg(1), Some(false), "{word}");
        assert_eq!(cmd.bool_arg(2), Some(false), "{word}");
    }
}

#[test]
fn numeric_literals() {
    let cmd = parser().parse("patrol config 2.5 no").unwrap();
    assert_eq!(cmd.args(), &[Value::Float(2.5), Value::Bool(false)]);

    let cmd = parser().parse("count -7").unwrap();
    assert_eq!(cmd.args(), &[Value::Int(-7)]);
}

#[test]
fn invalid_numeric_literal() {
    let err = parser().parse("count seven").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidLiteral { ref token, .. } if token == "seven"
    ));
}

#[test]
fn too_many_arguments() {
    let err = parser().parse("count 1 2").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TrailingArguments { ref command, ref remaining }
            if command == "count" && remaining == "2"
    ));
}
