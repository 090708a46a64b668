use log::trace;

use super::cursor::Cursor;
use crate::{
    Value,
    error::{ErrorKind, ParseError},
};

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done(Value),
    /// Byte did **not** match the expected byte.
    Reject,
}

/// Remaining bytes of a keyword and the value it produces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ExpectedLiteral {
    rest: &'static [u8],
    value: Value,
}

impl ExpectedLiteral {
    /// Start matching after the *first* byte (`n`, `t`, or `f`). Any other
    /// byte does not begin a literal.
    pub(crate) fn start(first: u8) -> Option<Self> {
        let (rest, value): (&'static [u8], _) = match first {
            b'n' => (b"ull", Value::Null),
            b't' => (b"rue", Value::True),
            b'f' => (b"alse", Value::False),
            _ => return None,
        };
        Some(Self { rest, value })
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub(crate) fn step(&mut self, b: u8) -> Step {
        match self.rest.split_first() {
            Some((&expected, rest)) if expected == b => {
                self.rest = rest;
                if rest.is_empty() {
                    Step::Done(self.value)
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}

/// Matches the keyword whose first byte is under `start`.
///
/// On a mismatch the error points at the first byte of the keyword and the
/// caller keeps its own cursor.
pub(crate) fn match_literal<'src>(
    mut expected: ExpectedLiteral,
    start: Cursor<'src>,
) -> Result<(Value, Cursor<'src>), ParseError> {
    let mut cursor = start;
    // the dispatcher already matched the first byte
    cursor.bump();
    loop {
        let Some(b) = cursor.peek() else {
            return Err(start.error(ErrorKind::InvalidValue));
        };
        match expected.step(b) {
            Step::NeedMore => cursor.bump(),
            Step::Done(value) => {
                cursor.bump();
                trace!("matched literal {:?} at {}", value, start.offset());
                return Ok((value, cursor));
            }
            Step::Reject => return Err(start.error(ErrorKind::InvalidValue)),
        }
    }
}
