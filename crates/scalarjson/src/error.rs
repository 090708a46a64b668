use core::fmt;

use thiserror::Error;

use crate::Value;

/// A syntax error, positioned at the start of the offending token.
///
/// Lines and columns are 1-based; columns count characters since the last
/// line feed. `offset` is the 0-based byte offset into the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ErrorKind,
    /// Byte offset of the offending token.
    pub offset: usize,
    /// Line of the offending token.
    pub line: usize,
    /// Column of the offending token.
    pub column: usize,
}

impl ParseError {
    /// The cause of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The flat status code for this error.
    #[must_use]
    pub fn status(&self) -> Status {
        self.kind.into()
    }
}

/// Why a parse failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty or held only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The token is neither a literal nor a well-formed number, or input
    /// starting with a number ends on `.`, `e` or `E`.
    #[error("invalid value")]
    InvalidValue,
    /// A value was followed by more input.
    ///
    /// Also reported when an unsigned `0` is followed by anything but `.`,
    /// `e`, `E` or the end of input (`01`, `0 `).
    #[error("root not singular")]
    RootNotSingular,
    /// The number's magnitude does not fit in an `f64`.
    #[error("number too big")]
    NumberTooBig,
}

/// Flat result code of a parse, for callers that want a single
/// discriminant instead of a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The document held exactly one value.
    Ok,
    /// See [`ErrorKind::ExpectValue`].
    ExpectValue,
    /// See [`ErrorKind::InvalidValue`].
    InvalidValue,
    /// See [`ErrorKind::RootNotSingular`].
    RootNotSingular,
    /// See [`ErrorKind::NumberTooBig`].
    NumberTooBig,
}

impl Status {
    /// Returns `true` for [`Status::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The error kind behind a failing status, `None` for [`Status::Ok`].
    #[must_use]
    pub fn error_kind(self) -> Option<ErrorKind> {
        match self {
            Status::Ok => None,
            Status::ExpectValue => Some(ErrorKind::ExpectValue),
            Status::InvalidValue => Some(ErrorKind::InvalidValue),
            Status::RootNotSingular => Some(ErrorKind::RootNotSingular),
            Status::NumberTooBig => Some(ErrorKind::NumberTooBig),
        }
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpectValue => Status::ExpectValue,
            ErrorKind::InvalidValue => Status::InvalidValue,
            ErrorKind::RootNotSingular => Status::RootNotSingular,
            ErrorKind::NumberTooBig => Status::NumberTooBig,
        }
    }
}

impl From<&Result<Value, ParseError>> for Status {
    fn from(result: &Result<Value, ParseError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => err.status(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_kind() {
            None => f.write_str("ok"),
            Some(kind) => fmt::Display::fmt(&kind, f),
        }
    }
}
