//! Number validation and conversion.
//!
//! Three checks run before any conversion:
//!
//! 1. The token starts with `-` or a digit.
//! 2. An unsigned `0` is followed by `.`, `e`, `E` or the end of input.
//!    Anything else after it (`01`, `0 `, `0x`) is reported as
//!    [`ErrorKind::RootNotSingular`], not as an invalid value.
//! 3. The input does not end on `.`, `e` or `E`. This looks at everything
//!    left in the buffer, so `1 e` is an invalid value as well.
//!
//! The lexeme is then the longest decimal prefix:
//!
//! ```text
//! number = [ "-" ] *digit [ "." *digit ] [ exp ]   ; at least one digit
//! exp    = ( "e" / "E" ) [ "+" / "-" ] 1*digit
//! ```
//!
//! An exponent marker without digits is not consumed, so in `1e+` the
//! lexeme is `1` and `e+` is left for the trailing check.

use core::str;

use log::trace;

use super::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};

fn is_marker(b: u8) -> bool {
    matches!(b, b'.' | b'e' | b'E')
}

/// Scans the number under `start`, returning its value and the cursor just
/// past it.
pub(crate) fn scan_number(start: Cursor<'_>) -> Result<(f64, Cursor<'_>), ParseError> {
    let invalid = || start.error(ErrorKind::InvalidValue);
    let rest = start.rest();

    if !matches!(rest.first(), Some(b'-' | b'0'..=b'9')) {
        return Err(invalid());
    }
    if rest.first() == Some(&b'0') && rest.get(1).is_some_and(|&b| !is_marker(b)) {
        let mut after_zero = start;
        after_zero.bump();
        return Err(after_zero.error(ErrorKind::RootNotSingular));
    }
    if rest.last().is_some_and(|&b| is_marker(b)) {
        return Err(invalid());
    }

    let mut cursor = start;
    if cursor.peek() == Some(b'-') {
        cursor.bump();
    }
    let mut digits = cursor.bump_while(|b| b.is_ascii_digit());
    if cursor.peek() == Some(b'.') {
        cursor.bump();
        digits += cursor.bump_while(|b| b.is_ascii_digit());
    }
    if digits == 0 {
        return Err(invalid());
    }
    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        let mut exponent = cursor;
        exponent.bump();
        if matches!(exponent.peek(), Some(b'+' | b'-')) {
            exponent.bump();
        }
        if exponent.bump_while(|b| b.is_ascii_digit()) > 0 {
            cursor = exponent;
        }
    }

    // Every accepted byte is ASCII.
    let text = str::from_utf8(cursor.consumed_since(&start)).map_err(|_| invalid())?;
    let value: f64 = text.parse().map_err(|_| invalid())?;
    // Decimal parsing saturates instead of failing on overflow.
    if value.is_infinite() {
        return Err(start.error(ErrorKind::NumberTooBig));
    }

    trace!("scanned number {text:?} = {value} at byte {}", start.offset());
    Ok((value, cursor))
}
