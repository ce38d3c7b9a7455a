//! Tests for typed literal parsing.

mod common;
use common::*;

use filterql_core::ast::Literal;

#[test]
fn integers_round_trip() {
    for n in [0, 1, -1, 42, 1_000_000, i64::MAX, i64::MIN] {
        assert_eq!(parse_literal(&n.to_string()), Literal::Integer(n), "{n}");
    }
}

#[test]
fn strings_round_trip() {
    for s in ["", "hello", "with spaces", "AND OR NOT", "100%", "naïve", "a\"b"] {
        assert_eq!(parse_literal(&format!("'{s}'")), Literal::text(s), "{s}");
    }
}

#[test]
fn booleans() {
    assert_eq!(parse_literal("true"), Literal::Boolean(true));
    assert_eq!(parse_literal("false"), Literal::Boolean(false));
    assert!(parse_literal_err("True").is_syntax());
}

#[test]
fn leap_day() {
    assert_eq!(
        parse_literal("DATE '2024-02-29'"),
        Literal::date(2024, 2, 29).unwrap()
    );
    assert!(parse_literal_err("DATE '2024-02-30'").is_literal_value());
    assert!(parse_literal_err("DATE '1900-02-29'").is_literal_value());
    assert_eq!(
        parse_literal("DATE '2000-02-29'"),
        Literal::date(2000, 2, 29).unwrap()
    );
}

#[test]
fn malformed_date_body_is_lexical() {
    for body in ["2024/01/01", "24-01-01", "2024-01-01 ", "", "2024-01-011"] {
        let text = format!("DATE '{body}'");
        assert!(parse_literal_err(&text).is_lexical(), "{text}");
    }
}

#[test]
fn timestamps() {
    let Literal::Timestamp(ts) = parse_literal("TIMESTAMP '1999-12-31 23:59:59.123456'") else {
        panic!("Expected timestamp");
    };
    assert_eq!((ts.year(), ts.month(), ts.day()), (1999, 12, 31));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (23, 59, 59));
    assert_eq!(ts.fraction_micros(), 123_456);
    assert_eq!(ts.precision(), 6);
    assert_eq!(ts.to_string(), "1999-12-31 23:59:59.123456");

    let Literal::Timestamp(ts) = parse_literal("TIMESTAMP '2024-03-01 00:00:00.5'") else {
        panic!("Expected timestamp");
    };
    assert_eq!(ts.fraction_micros(), 500_000);
    assert_eq!(ts.to_string(), "2024-03-01 00:00:00.5");
}

#[test]
fn timestamp_errors() {
    assert!(parse_literal_err("TIMESTAMP '2023-02-29 00:00:00'").is_literal_value());
    assert!(parse_literal_err("TIMESTAMP '2024-03-01 25:00:00'").is_literal_value());
    assert!(parse_literal_err("TIMESTAMP '2024-03-01'").is_lexical());
    assert!(parse_literal_err("TIMESTAMP '2024-03-01 1:00:00'").is_lexical());
    assert!(parse_literal_err("TIMESTAMP 5").is_syntax());
}

#[test]
fn list_literals() {
    assert_eq!(parse_literal("()"), Literal::List(vec![]));
    assert_eq!(
        parse_literal("(3, 'x', 1)"),
        Literal::List(vec![Literal::Integer(3), Literal::text("x"), Literal::Integer(1)])
    );
    assert!(parse_literal_err("(false)").is_syntax());
    assert!(parse_literal_err("(TIMESTAMP '2024-03-01 00:00:00')").is_syntax());
    assert!(parse_literal_err("((1))").is_syntax());
}

#[test]
fn integer_edge_cases() {
    assert!(parse_literal_err("9223372036854775808").is_lexical());
    assert!(parse_literal_err("12abc").is_lexical());
    assert!(parse_literal_err("1 2").is_trailing_input());
    assert!(parse_literal_err("- 1").is_syntax());
}

#[test]
fn surrounding_whitespace() {
    assert_eq!(parse_literal("  7\t"), Literal::Integer(7));
}
