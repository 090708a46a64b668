//! Read position over a borrowed input buffer.
//!
//! A [`Cursor`] is `Copy`. Scanners take one by value, advance their own
//! copy, and hand it back only on success; a failed scan therefore leaves the
//! caller's position untouched.

use crate::error::{ErrorKind, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'src> {
    input: &'src [u8],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Everything from the current position to the end of input.
    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.input[self.offset..]
    }

    /// Steps over one byte that is known not to be a line feed.
    #[inline]
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|b| b != b'\n'));
        self.offset += 1;
        self.column += 1;
    }

    /// Steps over bytes while `predicate` holds and returns how many were
    /// consumed. The predicate must never accept `\n`.
    pub(crate) fn bump_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let start = self.offset;
        while self.peek().is_some_and(&mut predicate) {
            self.bump();
        }
        self.offset - start
    }

    /// The bytes between `start` and this cursor.
    pub(crate) fn consumed_since(&self, start: &Cursor<'src>) -> &'src [u8] {
        &self.input[start.offset..self.offset]
    }

    /// Skips JSON whitespace (space, tab, line feed, carriage return).
    ///
    /// With `allow_unicode` any code point for which [`char::is_whitespace`]
    /// holds is skipped as well. Bytes that do not decode as UTF-8 end the
    /// run.
    #[must_use]
    pub(crate) fn skip_whitespace(mut self, allow_unicode: bool) -> Self {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' => self.bump(),
                b'\n' => {
                    self.offset += 1;
                    self.line += 1;
                    self.column = 1;
                }
                _ if !allow_unicode => break,
                _ if b.is_ascii() => {
                    if !char::from(b).is_whitespace() {
                        break;
                    }
                    self.bump();
                }
                _ => match bstr::decode_utf8(self.rest()) {
                    (Some(ch), len) if ch.is_whitespace() => {
                        self.offset += len;
                        self.column += 1;
                    }
                    _ => break,
                },
            }
        }
        self
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }
}
