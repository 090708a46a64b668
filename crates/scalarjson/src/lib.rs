//! A small parser for scalar JSON documents.
//!
//! A document holds exactly one of `null`, `true`, `false`, or a number,
//! optionally surrounded by whitespace. Arrays, objects and strings are not
//! part of this grammar.
//!
//! ```rust
//! use scalarjson::{ErrorKind, Status, Value, parse, parse_status};
//!
//! assert_eq!(parse(" -1.5e-3 "), Ok(Value::Number(-1.5e-3)));
//! assert_eq!(parse("01").unwrap_err().kind(), ErrorKind::RootNotSingular);
//! assert_eq!(parse_status("1e999"), (Status::NumberTooBig, Value::Null));
//! ```
//!
//! The crate is `no_std` and never allocates.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError, Status};
pub use parser::{Parser, ParserOptions};
pub use value::{Value, ValueType};

/// Parses `input` with default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::default().parse(input)
}

/// Parses `input` with default options and returns the flat status code
/// together with the value, which is [`Value::Null`] on failure.
#[must_use]
pub fn parse_status(input: &str) -> (Status, Value) {
    Parser::default().parse_status(input)
}
