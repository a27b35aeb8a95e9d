//! Segments produced by tokenizing one string literal.

use std::fmt;

use serde::Serialize;

use crate::tokenizer::{MARKER_CLOSE, MARKER_OPEN};

/// The two kinds of text a literal splits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SegmentKind {
    /// Text copied verbatim into the result.
    Literal,
    /// Source text of an expression whose string form is spliced in.
    Expression,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Literal => f.write_str("literal"),
            SegmentKind::Expression => f.write_str("expression"),
        }
    }
}

/// One piece of a tokenized literal.
///
/// Segments are immutable once produced. `offset` locates the segment in the
/// source: for literal segments it is where the text starts, for expression
/// segments it is the first character of the snippet inside the quoted token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    text: String,
    kind: SegmentKind,
    offset: usize,
}

impl Segment {
    /// Create a literal segment.
    pub fn literal(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Literal,
            offset,
        }
    }

    /// Create an expression segment.
    pub fn expression(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Expression,
            offset,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_expression(&self) -> bool {
        self.kind == SegmentKind::Expression
    }
}

/// Render segments back into literal text.
///
/// Literal segments are written verbatim and expression segments are wrapped
/// back into `${...}`, so `render(&tokenize(text, 0)?)` reproduces `text` for
/// every literal without an empty `${}`.
pub fn render(segments: &[Segment]) -> String {
    let mut result = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Literal => result.push_str(&segment.text),
            SegmentKind::Expression => {
                result.push_str(MARKER_OPEN);
                result.push_str(&segment.text);
                result.push_str(MARKER_CLOSE);
            }
        }
    }
    result
}
