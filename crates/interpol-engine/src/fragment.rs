//! Expression fragment parser.
//!
//! Turns the text of one expression segment into a `syn::Expr` that yields a
//! `String`, with every token relocated onto the original literal so later
//! diagnostics (type errors, unresolved names) point into the user's source
//! rather than at generated code.

use interpol_syntax::{Segment, SegmentKind};
use proc_macro2::{Group, Ident, Span, TokenStream, TokenTree};
use syn::{Expr, LitStr, parse_quote_spanned};

use crate::config::StringificationMode;
use crate::error::RewriteError;

/// How expression values become strings in generated code.
pub(crate) struct Stringification {
    pub mode: StringificationMode,
    /// Crate providing `__private` runtime support for explicit mode.
    pub krate: Ident,
}

/// Parse an expression segment of `lit` and wrap it for `strings`.
pub(crate) fn parse_fragment(
    segment: &Segment,
    lit: &LitStr,
    strings: &Stringification,
) -> Result<Expr, RewriteError> {
    let span = segment_span(lit, segment);

    let tokens: TokenStream = segment
        .text()
        .parse()
        .map_err(|err| RewriteError::expression_syntax(segment, span, err))?;
    let snippet: Expr = syn::parse2(relocate(tokens, span))
        .map_err(|err| RewriteError::expression_syntax(segment, span, err))?;

    Ok(wrap(strings, &snippet, span))
}

/// Source location of `segment` within `lit`.
///
/// Expression segments map onto a sub-span of the literal token when the
/// toolchain supports it and the token text has no escapes (so value offsets
/// equal token offsets). Everything else falls back to the whole literal.
pub(crate) fn segment_span(lit: &LitStr, segment: &Segment) -> Span {
    if segment.kind() != SegmentKind::Expression {
        return lit.span();
    }
    let token = lit.token();
    if token.to_string() != format!("\"{}\"", lit.value()) {
        return lit.span();
    }
    let start = segment.offset();
    token
        .subspan(start..start + segment.text().len())
        .unwrap_or_else(|| lit.span())
}

/// Set the span of every token, including inside groups.
fn relocate(tokens: TokenStream, span: Span) -> TokenStream {
    tokens
        .into_iter()
        .map(|tree| match tree {
            TokenTree::Group(group) => {
                let mut relocated = Group::new(group.delimiter(), relocate(group.stream(), span));
                relocated.set_span(span);
                TokenTree::Group(relocated)
            }
            mut other => {
                other.set_span(span);
                other
            }
        })
        .collect()
}

/// Explicit mode dispatches on the value's type at compile time: an `Option`
/// renders its content or `"null"`, any other `Display` value renders as
/// itself. Nothing is converted implicitly.
fn wrap(strings: &Stringification, snippet: &Expr, span: Span) -> Expr {
    let krate = &strings.krate;
    match strings.mode {
        StringificationMode::Implicit => parse_quote_spanned! {span=>
            ::std::string::ToString::to_string(&(#snippet))
        },
        StringificationMode::ExplicitNullSafe => parse_quote_spanned! {span=>
            ({
                use ::#krate::__private::kind::*;
                (&::#krate::__private::Stringify(&(#snippet))).interpol_to_string()
            })
        },
    }
}
