//! Segment model and tokenizer for `${...}` interpolated string literals.
//!
//! This crate holds the string-level half of interpolation: splitting a
//! literal's text into literal and expression segments, rendering segments
//! back, and rewriting backslash escapes. It knows nothing about syntax trees,
//! so the rewrite engine, the attribute macros and the CLI all share one
//! definition of the marker grammar.

mod error;
mod escape;
mod segment;
mod tokenizer;

pub use error::TokenizeError;
pub use escape::{ESCAPE_SEQUENCE, TRIGGER, escape_backslashes};
pub use segment::{Segment, SegmentKind, render};
pub use tokenizer::{MARKER_CLOSE, MARKER_OPEN, tokenize};
