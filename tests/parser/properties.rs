//! Properties over generated input.

use crate::parser;
use patrolbot_foundation::{Point3, Value};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

fn coord() -> impl Strategy<Value = i32> {
    -1000..1000i32
}

proptest! {
    #[test]
    fn parsing_is_idempotent(line in "\\PC{0,40}") {
        let parser = parser();
        let first = parser.parse(&line);
        let second = parser.parse(&line);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn boolean_slots_never_fail(word in "[^\\s\"]{1,12}") {
        let cmd = parser().parse(&format!("setPatrol route {word} {word}"));
        prop_assert!(cmd.is_ok());
    }

    #[test]
    fn integer_points_decode(x in coord(), y in coord(), z in coord()) {
        let cmd = parser().parse(&format!("goto ({x},{y},{z})")).unwrap();
        prop_assert_eq!(
            cmd.args(),
            &[Value::Point(Point3::new(f64::from(x), f64::from(y), f64::from(z)))]
        );
    }

    #[test]
    fn continued_points_keep_order(points in prop::collection::vec((coord(), coord(), coord()), 0..12)) {
        let text: Vec<String> = points.iter().map(|(x, y, z)| format!("({x},{y},{z})")).collect();
        let cmd = parser().parse(&format!("patrol set {}", text.join(" junk "))).unwrap();
        let expected: Vec<Point3> = points
            .iter()
            .map(|&(x, y, z)| Point3::new(f64::from(x), f64::from(y), f64::from(z)))
            .collect();
        prop_assert_eq!(cmd.points(), expected);
    }

    #[test]
    fn lone_string_round_trips(text in "[a-zA-Z0-9@/ ]{0,30}") {
        let cmd = parser().parse(&format!("say {text}")).unwrap();
        prop_assert_eq!(cmd.str_arg(0), Some(text.trim()));
    }
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = Arc::new(parser());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let line = format!("goto ({i},64,{i})");
                parser.parse(&line).map(|cmd| cmd.points())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let points = handle.join().unwrap().unwrap();
        let c = f64::from(u32::try_from(i).unwrap());
        assert_eq!(points, vec![Point3::new(c, 64.0, c)]);
    }
}
