//! Literal tokenizer using winnow.
//!
//! Splits the text of one string literal into literal and expression
//! segments. The marker grammar is deliberately flat: an expression runs from
//! `${` to the first `}` after it, with no nesting or escapes. Escapes are
//! handled beforehand by [`crate::escape_backslashes`].

use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::take_until;

use crate::error::TokenizeError;
use crate::segment::Segment;

/// Opens an embedded expression.
pub const MARKER_OPEN: &str = "${";

/// Closes an embedded expression.
pub const MARKER_CLOSE: &str = "}";

/// Expression offsets skip the marker plus the opening quote of the literal
/// token, so they address the snippet's first character in the source.
const EXPRESSION_OFFSET_SKEW: usize = MARKER_OPEN.len() + 1;

/// Split `text` into segments, offsetting every segment by `base_offset`.
///
/// Empty prefixes and empty `${}` markers produce no segment, so an empty
/// literal yields no segments at all.
///
/// # Example
///
/// ```
/// use interpol_syntax::{SegmentKind, tokenize};
///
/// let segments = tokenize("Hey-${name}!", 0).unwrap();
/// let kinds: Vec<_> = segments.iter().map(|s| s.kind()).collect();
/// assert_eq!(
///     kinds,
///     [SegmentKind::Literal, SegmentKind::Expression, SegmentKind::Literal]
/// );
/// assert_eq!(segments[1].text(), "name");
/// ```
pub fn tokenize(text: &str, base_offset: usize) -> Result<Vec<Segment>, TokenizeError> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let cursor = text.len() - remaining.len();

        let mut input = remaining;
        let Ok(prefix) = literal_prefix(&mut input) else {
            segments.push(Segment::literal(remaining, base_offset + cursor));
            break;
        };

        let open = cursor + prefix.len();
        let Ok(expression) = marker(&mut input) else {
            return Err(TokenizeError::UnterminatedInterpolation {
                text: text.to_string(),
            });
        };

        if !prefix.is_empty() {
            segments.push(Segment::literal(prefix, base_offset + cursor));
        }
        if !expression.is_empty() {
            segments.push(Segment::expression(
                expression,
                base_offset + open + EXPRESSION_OFFSET_SKEW,
            ));
        }

        remaining = input;
    }

    Ok(segments)
}

/// Everything up to the next marker-open. Fails when there is none.
fn literal_prefix<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_until(0.., MARKER_OPEN).parse_next(input)
}

/// A complete `${...}` marker, yielding the text between the delimiters.
fn marker<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited(MARKER_OPEN, take_until(0.., MARKER_CLOSE), MARKER_CLOSE).parse_next(input)
}
