//! Backslash escapes for the marker trigger character.
//!
//! The tokenizer has no notion of escapes, so `\$` is rewritten before
//! tokenization into a marker whose expression evaluates to `$`. The escaped
//! dollar then reaches the output through ordinary segment evaluation and is
//! never seen as the start of a marker.

use std::borrow::Cow;

/// The character that starts a marker.
pub const TRIGGER: char = '$';

/// A backslash immediately followed by the trigger character.
pub const ESCAPE_SEQUENCE: &str = "\\$";

/// Replace every `\$` in `text` with `${<trigger_expr>}`.
///
/// `trigger_expr` must be an expression that renders as `$` under the active
/// stringification mode. Text without escapes is returned borrowed.
///
/// # Example
///
/// ```
/// use interpol_syntax::escape_backslashes;
///
/// assert_eq!(escape_backslashes(r"\${x}", "'$'"), "${'$'}{x}");
/// assert_eq!(escape_backslashes("${x}", "'$'"), "${x}");
/// ```
pub fn escape_backslashes<'a>(text: &'a str, trigger_expr: &str) -> Cow<'a, str> {
    if !text.contains(ESCAPE_SEQUENCE) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(ESCAPE_SEQUENCE, &format!("${{{trigger_expr}}}")))
}
