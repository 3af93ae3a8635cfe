//! Continued parameters consume the rest of the line.

use crate::parser;
use patrolbot_foundation::{ErrorKind, Point3, Value};

#[test]
fn points_are_extracted_permissively() {
    let cmd = parser().parse("patrol set (1,2,3) junk (4,5,6)").unwrap();
    assert_eq!(cmd.path(), "patrol set");
    assert_eq!(
        cmd.points(),
        vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]
    );
}

#[test]
fn malformed_groups_are_skipped() {
    let cmd = parser().parse("patrol set (1,2) (a,b,c) (7,8,9)").unwrap();
    assert_eq!(cmd.points(), vec![Point3::new(7.0, 8.0, 9.0)]);
}

#[test]
fn points_need_no_separating_space() {
    let cmd = parser().parse("patrol set (1,1,1)(2,2,2)").unwrap();
    assert_eq!(cmd.points().len(), 2);
}

#[test]
fn no_points_is_empty_not_error() {
    let cmd = parser().parse("patrol set").unwrap();
    assert!(cmd.args().is_empty());
}

#[test]
fn continued_never_reports_trailing_arguments() {
    let cmd = parser().parse("tags alpha beta gamma").unwrap();
    assert_eq!(
        cmd.args(),
        &[Value::from("alpha"), Value::from("beta"), Value::from("gamma")]
    );
}

#[test]
fn continued_numbers_are_converted() {
    let cmd = parser().parse("ids 1 2 3").unwrap();
    assert_eq!(cmd.args(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn continued_numbers_reject_bad_words() {
    let err = parser().parse("ids 1 two 3").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidLiteral { ref token, .. } if token == "two"
    ));
}

#[test]
fn stray_open_paren_does_not_swallow_points() {
    let cmd = parser().parse("patrol set (start (1,2,3) (4,5,6)").unwrap();
    assert_eq!(
        cmd.points(),
        vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]
    );

    let cmd = parser().parse("patrol set ((1,2,3)").unwrap();
    assert_eq!(cmd.points(), vec![Point3::new(1.0, 2.0, 3.0)]);
}
