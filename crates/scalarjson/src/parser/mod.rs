//! Single-pass parser for scalar JSON documents.
//!
//! Overview
//! - A document is optional whitespace, exactly one value, optional
//!   whitespace, and nothing else.
//! - The value is chosen from its first byte: `t`, `f` and `n` start a
//!   literal, the end of input means no value was given, and every other
//!   byte goes to the number scanner. Tokens such as `xyz` therefore fail
//!   with the scanner's [`ErrorKind::InvalidValue`].
//! - Each stage takes a `Cursor` by value and returns the advanced copy on
//!   success, so nothing is partially consumed when a stage fails.
//!
//! The parser never allocates and holds no state between calls; one
//! [`Parser`] may be shared freely.

mod cursor;
mod literal;
mod number;
mod options;


use core::ffi::CStr;

use cursor::Cursor;
use literal::ExpectedLiteral;
use log::{debug, trace};
pub use options::ParserOptions;

use crate::{
    Value,
    error::{ErrorKind, ParseError, Status},
};

/// Parses one scalar JSON value per call.
///
/// # Examples
///
/// ```
/// use scalarjson::{ErrorKind, Parser, Value};
///
/// let parser = Parser::default();
/// assert_eq!(parser.parse(" null "), Ok(Value::Null));
/// assert_eq!(parser.parse("true x").unwrap_err().kind(), ErrorKind::RootNotSingular);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a whole document.
    ///
    /// The input must hold exactly one value, optionally surrounded by
    /// whitespace. Bytes that are not valid UTF-8 are never whitespace and
    /// never part of a value.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error found, positioned at the start of the
    /// offending token.
    pub fn parse(&self, input: impl AsRef<[u8]>) -> Result<Value, ParseError> {
        let input = input.as_ref();
        trace!("parsing {} byte document", input.len());
        let result = self.parse_document(Cursor::new(input));
        if let Err(err) = &result {
            debug!("parse failed: {err} (byte {})", err.offset);
            #[cfg(any(test, feature = "fuzzing"))]
            assert!(!self.options.panic_on_error, "{err}");
        }
        result
    }

    /// Parses a NUL-terminated buffer; the terminator marks the end of input.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn parse_c_str(&self, input: &CStr) -> Result<Value, ParseError> {
        self.parse(input.to_bytes())
    }

    /// Parses a document and flattens the outcome into a status code and a
    /// value. The value is [`Value::Null`] whenever the status is not
    /// [`Status::Ok`].
    #[must_use]
    pub fn parse_status(&self, input: impl AsRef<[u8]>) -> (Status, Value) {
        let result = self.parse(input);
        (Status::from(&result), result.unwrap_or_default())
    }

    fn parse_document(&self, cursor: Cursor<'_>) -> Result<Value, ParseError> {
        let cursor = cursor.skip_whitespace(self.options.allow_unicode_whitespace);
        let (value, cursor) = Self::parse_value(cursor)?;
        let cursor = cursor.skip_whitespace(self.options.allow_unicode_whitespace);
        if !cursor.is_at_end() {
            trace!("trailing content at byte {}", cursor.offset());
            return Err(cursor.error(ErrorKind::RootNotSingular));
        }
        Ok(value)
    }

    fn parse_value(cursor: Cursor<'_>) -> Result<(Value, Cursor<'_>), ParseError> {
        let Some(first) = cursor.peek() else {
            return Err(cursor.error(ErrorKind::ExpectValue));
        };
        match ExpectedLiteral::start(first) {
            Some(expected) => literal::match_literal(expected, cursor),
            None => {
                let (n, end) = number::scan_number(cursor)?;
                Ok((Value::Number(n), end))
            }
        }
    }
}
