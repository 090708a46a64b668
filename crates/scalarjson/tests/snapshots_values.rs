#![allow(missing_docs)]

use core::fmt::Write;

use scalarjson::{parse, parse_status};

const CASES: [&str; 20] = [
    "null", " true ", "false", "0", "-0", "1.5", "-1.5e-3", "1e10", "", "   ", "nul", "01",
    "0 ", "1.", "1. ", "1e ", "1 e", "+1", "1e999", "true x",
];

fn render_statuses(cases: &[&str]) -> String {
    let mut out = String::new();
    for input in cases {
        let (status, value) = parse_status(input);
        writeln!(out, "{input:?} -> {status:?} {value:?}").unwrap();
    }
    out
}

fn render_errors(cases: &[&str]) -> String {
    let mut out = String::new();
    for input in cases {
        if let Err(err) = parse(input) {
            writeln!(out, "{input:?} -> {err}").unwrap();
        }
    }
    out
}

#[test]
fn snapshot_statuses() {
    insta::assert_snapshot!(render_statuses(&CASES), @r#"
    "null" -> Ok Null
    " true " -> Ok True
    "false" -> Ok False
    "0" -> Ok Number(0.0)
    "-0" -> Ok Number(-0.0)
    "1.5" -> Ok Number(1.5)
    "-1.5e-3" -> Ok Number(-0.0015)
    "1e10" -> Ok Number(10000000000.0)
    "" -> ExpectValue Null
    "   " -> ExpectValue Null
    "nul" -> InvalidValue Null
    "01" -> RootNotSingular Null
    "0 " -> RootNotSingular Null
    "1." -> InvalidValue Null
    "1. " -> Ok Number(1.0)
    "1e " -> RootNotSingular Null
    "1 e" -> InvalidValue Null
    "+1" -> InvalidValue Null
    "1e999" -> NumberTooBig Null
    "true x" -> RootNotSingular Null
    "#);
}

#[test]
fn snapshot_error_messages() {
    insta::assert_snapshot!(render_errors(&CASES), @r#"
    "" -> expected a value at 1:1
    "   " -> expected a value at 1:4
    "nul" -> invalid value at 1:1
    "01" -> root not singular at 1:2
    "0 " -> root not singular at 1:2
    "1." -> invalid value at 1:1
    "1e " -> root not singular at 1:2
    "1 e" -> invalid value at 1:1
    "+1" -> invalid value at 1:1
    "1e999" -> number too big at 1:1
    "true x" -> root not singular at 1:6
    "#);
}
