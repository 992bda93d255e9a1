//! Caret-annotated error reports
//!
//! Renders lexer, parser, and evaluation failures against the original
//! source: the source text on one line, a `^` marker under the offending
//! column, then the message.

/// Render a caret diagnostic for an error at byte `offset` into `source`.
///
/// The caret column is counted in characters, not bytes, so the marker stays
/// aligned when the offending byte sits after multi-byte characters.
pub fn render(source: &str, offset: usize, message: &str) -> String {
    let column = match source.get(..offset) {
        Some(prefix) => prefix.chars().count(),
        None => offset,
    };

    format!("{}\n{}^ {}", source, " ".repeat(column), message)
}
