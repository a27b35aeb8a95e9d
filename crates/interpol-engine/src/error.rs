//! Rewrite error types.

use interpol_syntax::{Segment, TokenizeError};
use proc_macro2::Span;
use thiserror::Error;

/// An error that aborts the rewrite of a compilation unit.
///
/// Every variant carries the span of the original literal (or of the snippet
/// inside it), never a position in generated code.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// A `${` without a closing `}`.
    #[error("{source}")]
    Unterminated {
        #[source]
        source: TokenizeError,
        span: Span,
    },

    /// An expression segment that is not a single valid Rust expression.
    #[error("invalid expression `{text}` at offset {offset} in interpolated string: {message}")]
    ExpressionSyntax {
        text: String,
        offset: usize,
        message: String,
        span: Span,
    },

    /// A segment kind the rewriter does not know how to splice.
    ///
    /// This is an internal invariant violation, not a user error.
    #[error("internal error: unsupported segment kind `{}` for `{}`", segment.kind(), segment.text())]
    UnsupportedSegment { segment: Segment, span: Span },

    /// A configured crate name that cannot be spliced into a path.
    #[error("invalid crate name `{name}`: expected a single identifier")]
    InvalidCrateName { name: String, span: Span },
}

impl RewriteError {
    pub(crate) fn expression_syntax(
        segment: &Segment,
        span: Span,
        message: impl ToString,
    ) -> Self {
        RewriteError::ExpressionSyntax {
            text: segment.text().to_string(),
            offset: segment.offset(),
            message: message.to_string(),
            span,
        }
    }

    /// Location of the offending literal or snippet.
    pub fn span(&self) -> Span {
        match self {
            RewriteError::Unterminated { span, .. }
            | RewriteError::ExpressionSyntax { span, .. }
            | RewriteError::UnsupportedSegment { span, .. }
            | RewriteError::InvalidCrateName { span, .. } => *span,
        }
    }

    /// Convert into a `syn::Error` pointing at the original source.
    pub fn into_syn_error(self) -> syn::Error {
        syn::Error::new(self.span(), self.to_string())
    }
}

impl From<RewriteError> for syn::Error {
    fn from(err: RewriteError) -> Self {
        err.into_syn_error()
    }
}
