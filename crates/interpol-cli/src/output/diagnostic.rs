//! Miette diagnostic wrapper for interpolation errors.

use std::path::Path;

use interpol_engine::RewriteError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use proc_macro2::{LineColumn, Span};
use thiserror::Error;

/// A miette-compatible diagnostic for a file that failed to rewrite.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(interpol::rewrite))]
pub struct InterpolDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    label: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl InterpolDiagnostic {
    /// Create a diagnostic from a rewrite error, labelled at the literal or
    /// snippet it came from.
    pub fn from_rewrite_error(path: &Path, content: &str, err: &RewriteError) -> Self {
        let (label, help) = match err {
            RewriteError::Unterminated { .. } => (
                "interpolation starts here",
                Some("close the marker with `}`, or write `\\$` for a literal dollar sign"),
            ),
            RewriteError::ExpressionSyntax { .. } => (
                "invalid expression",
                Some("the text between `${` and `}` must be a single Rust expression"),
            ),
            RewriteError::UnsupportedSegment { .. } => ("unsupported segment", None),
            RewriteError::InvalidCrateName { .. } => (
                "while rewriting this file",
                Some("pass the facade crate's name as a plain identifier"),
            ),
        };
        Self::at_span(path, content, err.span(), err.to_string(), label, help)
    }

    /// Create a diagnostic for a file that is not valid Rust to begin with.
    pub fn from_syn_error(path: &Path, content: &str, err: &syn::Error) -> Self {
        Self::at_span(
            path,
            content,
            err.span(),
            format!("syntax error: {err}"),
            "error here",
            None,
        )
    }

    fn at_span(
        path: &Path,
        content: &str,
        span: Span,
        message: String,
        label: &str,
        help: Option<&str>,
    ) -> Self {
        let start = byte_offset(content, span.start());
        let end = byte_offset(content, span.end()).max(start);

        InterpolDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (start, (end - start).max(1)).into(),
            label: label.to_string(),
            message,
            help: help.map(str::to_string),
        }
    }
}

/// Convert a 1-based line and 0-based character column to a byte offset.
///
/// Clamped to the content length so miette never indexes out of bounds.
pub fn byte_offset(content: &str, position: LineColumn) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(position.line.saturating_sub(1))
        .map(str::len)
        .sum();
    let column: usize = content[line_start.min(content.len())..]
        .chars()
        .take_while(|c| *c != '\n')
        .take(position.column)
        .map(char::len_utf8)
        .sum();
    (line_start + column).min(content.len())
}
