use std::{format, string::String};

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use super::arbitrary::{JsonNumber, Whitespace, render};
use crate::{Parser, ParserOptions, Status, Value, parse, parse_status};

fn tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Property: every finite `f64`, printed in plain or exponent form, parses
/// back to the identical bit pattern.
#[test]
fn number_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(n: JsonNumber, exponent: bool) -> bool {
        let src = render(&Value::Number(n.0), exponent);
        matches!(parse(&src), Ok(Value::Number(m)) if m.to_bits() == n.0.to_bits())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(JsonNumber, bool) -> bool);
}

/// Property: surrounding whitespace never changes the parsed value, except
/// that an unsigned `0` must be the last byte when no `.` or exponent
/// follows it.
#[test]
fn padded_value_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, before: Whitespace, after: Whitespace) -> bool {
        let text = render(&value, false);
        let src = format!("{}{}{}", before.0, text, after.0);
        if text == "0" && !after.0.is_empty() {
            parse_status(&src) == (Status::RootNotSingular, Value::Null)
        } else {
            parse(&src) == Ok(value)
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value, Whitespace, Whitespace) -> bool);
}

/// Property: two values in one document are always rejected. A number
/// followed by `true` or `false` is an invalid value because the input ends
/// on `e`; every other pair is trailing content.
#[test]
fn two_roots_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(first: Value, second: Value, gap: Whitespace) -> TestResult {
        if gap.0.is_empty() {
            return TestResult::discard();
        }
        let head = render(&first, false);
        let src = format!("{}{}{}", head, gap.0, render(&second, true));
        let ends_on_e = matches!(second, Value::True | Value::False);
        let expected = if first.is_number() && head != "0" && ends_on_e {
            Status::InvalidValue
        } else {
            Status::RootNotSingular
        };
        TestResult::from_bool(parse_status(&src) == (expected, Value::Null))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value, Value, Whitespace) -> TestResult);
}

/// Property: parsing is a pure function of the input, and the status form
/// agrees with the result form.
#[quickcheck]
fn status_agrees_with_result(src: String) -> bool {
    let parser = Parser::new(ParserOptions::default());
    let result = parser.parse(&src);
    let (status, value) = parser.parse_status(&src);
    result == parser.parse(&src)
        && status == Status::from(&result)
        && value == result.unwrap_or(Value::Null)
}
