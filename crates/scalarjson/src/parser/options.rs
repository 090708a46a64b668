/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use scalarjson::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions {
///     allow_unicode_whitespace: true,
///     ..Default::default()
/// });
/// assert_eq!(parser.parse("\u{3000}true\u{2028}"), Ok(Value::True));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to allow any Unicode whitespace around the value.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces on parse
    /// failures.
    pub panic_on_error: bool,
}
