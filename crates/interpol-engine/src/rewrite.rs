//! The interpolation pass and the driver that runs both passes over a unit.

use interpol_syntax::{Segment, SegmentKind, tokenize};
use proc_macro2::{Ident, Span};
use syn::{BinOp, Expr, ExprBinary, ExprLit, ExprParen, ExprReference, Lit, LitStr, Token, token};

use crate::config::{Config, StringificationMode};
use crate::error::RewriteError;
use crate::escape::EscapePass;
use crate::fragment::{Stringification, parse_fragment, segment_span};
use crate::scope::{Markers, Scope};
use crate::unit::CompilationUnit;
use crate::walker::{LiteralPass, Outcome, RewriteStats, ScopeWalker};

/// A rewritten compilation unit.
#[derive(Debug)]
pub struct Rewritten<U> {
    unit: U,
    stats: RewriteStats,
}

impl<U> Rewritten<U> {
    pub fn unit(&self) -> &U {
        &self.unit
    }

    pub fn into_unit(self) -> U {
        self.unit
    }

    pub fn stats(&self) -> RewriteStats {
        self.stats
    }
}

/// Rewrite every eligible string literal in `unit`.
///
/// Runs the escape pre-pass (when enabled) to completion, then the
/// interpolation pass. The first error aborts the unit: nothing of a
/// partially rewritten tree is returned.
///
/// # Example
///
/// ```
/// use interpol_engine::{Config, rewrite};
/// use quote::ToTokens;
///
/// let item: syn::Item = syn::parse_quote! {
///     fn greet(name: &str) -> String {
///         "Hello, ${name}!"
///     }
/// };
/// let rewritten = rewrite(item, &Config::default()).unwrap();
/// assert_eq!(rewritten.stats().interpolated, 1);
/// assert!(rewritten.unit().to_token_stream().to_string().contains("to_string"));
/// ```
pub fn rewrite<U: CompilationUnit>(
    mut unit: U,
    config: &Config,
) -> Result<Rewritten<U>, RewriteError> {
    let krate = crate_ident(config.crate_name())?;
    let markers = Markers::new(config.crate_name());
    let opted_out = unit
        .root_attributes()
        .is_some_and(|attrs| markers.has_opt_out(attrs));
    let root = Scope::root().enter(opted_out);

    if config.backslash_escapes() {
        let pass = EscapePass::new(config.mode());
        let mut walker = ScopeWalker::new(&pass, &markers, root);
        unit = unit.fold_with(&mut walker);
        walker.finish()?;
    }

    let pass = InterpolationPass::new(config.mode(), krate);
    let mut walker = ScopeWalker::new(&pass, &markers, root);
    unit = unit.fold_with(&mut walker);
    let stats = walker.finish()?;

    if let Some(attrs) = unit.root_attributes() {
        markers.strip(attrs);
    }

    tracing::debug!(
        interpolated = stats.interpolated,
        unchanged = stats.unchanged,
        skipped = stats.skipped,
        "rewrote compilation unit"
    );
    Ok(Rewritten { unit, stats })
}

fn crate_ident(name: &str) -> Result<Ident, RewriteError> {
    syn::parse_str::<Ident>(name).map_err(|_| RewriteError::InvalidCrateName {
        name: name.to_string(),
        span: Span::call_site(),
    })
}

pub(crate) struct InterpolationPass {
    strings: Stringification,
}

impl InterpolationPass {
    pub fn new(mode: StringificationMode, krate: Ident) -> Self {
        InterpolationPass {
            strings: Stringification { mode, krate },
        }
    }

    fn to_expr(&self, segment: &Segment, lit: &LitStr) -> Result<Expr, RewriteError> {
        match segment.kind() {
            SegmentKind::Literal => Ok(string_literal(segment.text(), lit.span())),
            SegmentKind::Expression => parse_fragment(segment, lit, &self.strings),
            _ => Err(RewriteError::UnsupportedSegment {
                segment: segment.clone(),
                span: lit.span(),
            }),
        }
    }

    /// Left fold `first + rest[0] + rest[1] + ...` into one `String`.
    ///
    /// The accumulator must be owned for `+` to apply, so a literal seed is
    /// wrapped in `String::from`. Expression pieces are borrowed. Every node
    /// of the tree is anchored at the first segment.
    fn concatenate(
        &self,
        first: &Segment,
        rest: &[Segment],
        lit: &LitStr,
    ) -> Result<Expr, RewriteError> {
        let anchor = segment_span(lit, first);

        let mut acc = match self.to_expr(first, lit)? {
            Expr::Lit(seed) => syn::parse_quote_spanned!(anchor=> ::std::string::String::from(#seed)),
            seed => seed,
        };
        for segment in rest {
            let piece = match self.to_expr(segment, lit)? {
                literal @ Expr::Lit(_) => literal,
                fragment => Expr::Reference(ExprReference {
                    attrs: Vec::new(),
                    and_token: Token![&](anchor),
                    mutability: None,
                    expr: Box::new(fragment),
                }),
            };
            acc = Expr::Binary(ExprBinary {
                attrs: Vec::new(),
                left: Box::new(acc),
                op: BinOp::Add(Token![+](anchor)),
                right: Box::new(piece),
            });
        }

        Ok(Expr::Paren(ExprParen {
            attrs: Vec::new(),
            paren_token: token::Paren(anchor),
            expr: Box::new(acc),
        }))
    }
}

impl LiteralPass for InterpolationPass {
    fn rewrite_literal(&self, lit: &ExprLit) -> Result<Outcome, RewriteError> {
        let Lit::Str(string) = &lit.lit else {
            return Ok(Outcome::Unchanged);
        };
        let value = string.value();
        if value.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let segments = tokenize(&value, 0).map_err(|source| RewriteError::Unterminated {
            source,
            span: string.span(),
        })?;

        let outcome = match segments.as_slice() {
            [] => Outcome::Unchanged,
            // Replacing a literal with an identical literal changes nothing.
            [only] if only.kind() == SegmentKind::Literal && only.text() == value => {
                Outcome::Unchanged
            }
            [only] => Outcome::Single(self.to_expr(only, string)?),
            [first, rest @ ..] => Outcome::Concatenation(self.concatenate(first, rest, string)?),
        };

        if !matches!(outcome, Outcome::Unchanged) {
            tracing::trace!(segments = segments.len(), literal = %value, "interpolated string literal");
        }
        Ok(outcome)
    }

    fn strips_markers(&self) -> bool {
        true
    }
}

fn string_literal(text: &str, span: Span) -> Expr {
    Expr::Lit(ExprLit {
        attrs: Vec::new(),
        lit: Lit::Str(LitStr::new(text, span)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::{File, Item, parse_quote};

    fn rewrite_item(item: Item) -> Rewritten<Item> {
        rewrite(item, &Config::default()).unwrap()
    }

    fn rewrite_expr(expr: Expr) -> Expr {
        rewrite(expr, &Config::default()).unwrap().into_unit()
    }

    #[test]
    fn plain_literal_is_unchanged() {
        let expr: Expr = parse_quote!("just a text");
        assert_eq!(rewrite_expr(expr.clone()), expr);
    }

    #[test]
    fn empty_literal_is_unchanged() {
        let expr: Expr = parse_quote!("");
        let rewritten = rewrite(expr.clone(), &Config::default()).unwrap();
        assert_eq!(rewritten.unit(), &expr);
        assert_eq!(rewritten.stats().unchanged, 1);
    }

    #[test]
    fn lone_close_brace_is_unchanged() {
        let expr: Expr = parse_quote!("a}b");
        assert_eq!(rewrite_expr(expr.clone()), expr);
    }

    #[test]
    fn single_expression_is_not_a_concatenation() {
        let expr = rewrite_expr(parse_quote!("${variable}"));
        assert!(!matches!(expr, Expr::Binary(_) | Expr::Paren(_)));
        let expected: Expr = parse_quote!(::std::string::ToString::to_string(&(variable)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn multiple_segments_fold_left() {
        let expr = rewrite_expr(parse_quote!("expr : ${a}+${b}=${sum}!"));
        let expected: Expr = parse_quote! {
            (::std::string::String::from("expr : ")
                + &::std::string::ToString::to_string(&(a))
                + "+"
                + &::std::string::ToString::to_string(&(b))
                + "="
                + &::std::string::ToString::to_string(&(sum))
                + "!")
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn expression_seed_is_not_wrapped() {
        let expr = rewrite_expr(parse_quote!("${x} + ${y}"));
        let expected: Expr = parse_quote! {
            (::std::string::ToString::to_string(&(x))
                + " + "
                + &::std::string::ToString::to_string(&(y)))
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn marker_at_end_adds_no_trailing_literal() {
        let expr = rewrite_expr(parse_quote!("Hey-${x}"));
        let expected: Expr = parse_quote! {
            (::std::string::String::from("Hey-") + &::std::string::ToString::to_string(&(x)))
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn byte_and_suffixed_strings_are_ignored() {
        let expr: Expr = parse_quote!(b"${x}");
        assert_eq!(rewrite_expr(expr.clone()), expr);
        let expr: Expr = parse_quote!("${x}"suffix);
        assert_eq!(rewrite_expr(expr.clone()), expr);
    }

    #[test]
    fn opt_out_function_is_left_alone() {
        let rewritten = rewrite_item(parse_quote! {
            #[no_interpolation]
            fn f() -> &'static str {
                "${x}"
            }
        });
        let expected: Item = parse_quote! {
            fn f() -> &'static str {
                "${x}"
            }
        };
        assert_eq!(rewritten.unit(), &expected);
        assert_eq!(rewritten.stats().skipped, 1);
    }

    #[test]
    fn opt_out_is_inherited_by_nested_declarations() {
        let rewritten = rewrite_item(parse_quote! {
            #[no_interpolation]
            mod m {
                fn f() {
                    let a = "${x}";
                }
                struct S;
                impl S {
                    fn g() -> &'static str {
                        "${y}"
                    }
                }
            }
        });
        let stats = rewritten.stats();
        assert_eq!(stats.interpolated, 0);
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn opt_out_on_impl_does_not_leak_to_siblings() {
        let rewritten = rewrite_item(parse_quote! {
            mod m {
                #[no_interpolation]
                impl S {
                    fn g() -> &'static str {
                        "${y}"
                    }
                }
                fn f() -> String {
                    "${x}"
                }
            }
        });
        let stats = rewritten.stats();
        assert_eq!(stats.interpolated, 1);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn opt_out_on_let_statement() {
        let rewritten = rewrite_item(parse_quote! {
            fn f() {
                #[no_interpolation]
                let a = "${x}";
                let b = "${x}";
            }
        });
        let expected: Item = parse_quote! {
            fn f() {
                let a = "${x}";
                let b = ::std::string::ToString::to_string(&(x));
            }
        };
        assert_eq!(rewritten.unit(), &expected);
    }

    #[test]
    fn qualified_markers_match() {
        for item in [
            parse_quote!(#[interpol::no_interpolation] fn f() -> &'static str { "${x}" }),
            parse_quote!(#[::interpol::no_interpolation] fn f() -> &'static str { "${x}" }),
        ] {
            assert_eq!(rewrite_item(item).stats().interpolated, 0);
        }
    }

    #[test]
    fn unrelated_attributes_do_not_opt_out() {
        let rewritten = rewrite_item(parse_quote! {
            #[other::no_interpolation]
            #[no_interpolation(reason)]
            fn f() -> String {
                "${x}"
            }
        });
        let expected: Item = parse_quote! {
            #[other::no_interpolation]
            #[no_interpolation(reason)]
            fn f() -> String {
                ::std::string::ToString::to_string(&(x))
            }
        };
        assert_eq!(rewritten.unit(), &expected);
    }

    #[test]
    fn attribute_arguments_are_never_rewritten() {
        let rewritten = rewrite_item(parse_quote! {
            #[doc = "${1+2}"]
            #[deprecated(note = "${since}")]
            fn f() -> String {
                "${1+2}"
            }
        });
        let expected: Item = parse_quote! {
            #[doc = "${1+2}"]
            #[deprecated(note = "${since}")]
            fn f() -> String {
                ::std::string::ToString::to_string(&(1+2))
            }
        };
        assert_eq!(rewritten.unit(), &expected);
        assert_eq!(rewritten.stats().interpolated, 1);
        assert_eq!(rewritten.stats().skipped, 1);
    }

    #[test]
    fn enum_variant_attributes_are_excluded() {
        let rewritten = rewrite_item(parse_quote! {
            enum Version {
                #[doc = "${1+2}"]
                First,
            }
        });
        assert_eq!(rewritten.stats().interpolated, 0);
    }

    #[test]
    fn nested_interpolate_attribute_is_stripped() {
        let rewritten = rewrite_item(parse_quote! {
            mod m {
                #[interpolate(explicit_to_string)]
                fn f() -> String {
                    "${x}"
                }
            }
        });
        let expected: Item = parse_quote! {
            mod m {
                fn f() -> String {
                    ::std::string::ToString::to_string(&(x))
                }
            }
        };
        assert_eq!(rewritten.unit(), &expected);
    }

    #[test]
    fn pattern_and_macro_literals_are_untouched() {
        let item: Item = parse_quote! {
            fn f(s: &str) -> bool {
                println!("${s}");
                match s {
                    "${x}" => true,
                    _ => false,
                }
            }
        };
        let rewritten = rewrite_item(item.clone());
        assert_eq!(rewritten.unit(), &item);
        assert_eq!(rewritten.stats(), RewriteStats::default());
    }

    #[test]
    fn stats_count_each_literal() {
        let rewritten = rewrite_item(parse_quote! {
            fn f() {
                let a = "plain";
                let b = "${x}";
                let c = "";
            }
        });
        assert_eq!(
            rewritten.stats(),
            RewriteStats {
                interpolated: 1,
                unchanged: 2,
                skipped: 0,
            }
        );
    }

    #[test]
    fn unterminated_marker_aborts_the_unit() {
        let err = rewrite(
            parse_quote! {
                fn f() {
                    let a = "${x}";
                    let b = "${aaa";
                }
            },
            &Config::default(),
        )
        .map(|_: Rewritten<Item>| ())
        .unwrap_err();
        match err {
            RewriteError::Unterminated { source, .. } => {
                assert!(source.to_string().contains("${aaa"));
            }
            other => panic!("expected unterminated error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_expression_aborts_the_unit() {
        let err = rewrite(parse_quote!("sum = ${1 +}"), &Config::default())
            .map(|_: Rewritten<Expr>| ())
            .unwrap_err();
        match err {
            RewriteError::ExpressionSyntax { text, offset, .. } => {
                assert_eq!(text, "1 +");
                assert_eq!(offset, 9);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn errors_inside_opt_out_are_ignored() {
        let rewritten = rewrite_item(parse_quote! {
            #[no_interpolation]
            fn f() -> &'static str {
                "${aaa"
            }
        });
        assert_eq!(rewritten.stats().skipped, 1);
    }

    #[test]
    fn backslash_escape_keeps_marker_text() {
        let expr = rewrite_expr(parse_quote!("cost: \\${amount}"));
        let expected: Expr = parse_quote! {
            (::std::string::String::from("cost: ")
                + &::std::string::ToString::to_string(&('$'))
                + "{amount}")
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn backslash_escape_can_be_disabled() {
        let config = Config::builder().backslash_escapes(false).build();
        let expr: Expr = rewrite(parse_quote!("a\\${x}"), &config).unwrap().into_unit();
        let expected: Expr = parse_quote! {
            (::std::string::String::from("a\\") + &::std::string::ToString::to_string(&(x)))
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn escapes_are_not_applied_in_opted_out_code() {
        let item: Item = parse_quote! {
            fn f() -> &'static str {
                "\\${x}"
            }
        };
        let rewritten = rewrite_item(parse_quote! {
            #[no_interpolation]
            fn f() -> &'static str {
                "\\${x}"
            }
        });
        assert_eq!(rewritten.unit(), &item);
    }

    #[test]
    fn explicit_mode_uses_runtime_support() {
        let config = Config::builder()
            .mode(StringificationMode::ExplicitNullSafe)
            .build();
        let expr: Expr = rewrite(parse_quote!("\\$"), &config).unwrap().into_unit();
        let expected: Expr = parse_quote! {
            ({
                use ::interpol::__private::kind::*;
                (&::interpol::__private::Stringify(&(::core::option::Option::Some('$'))))
                    .interpol_to_string()
            })
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn explicit_mode_follows_crate_name() {
        let config = Config::builder()
            .mode(StringificationMode::ExplicitNullSafe)
            .crate_name("facade")
            .build();
        let expr: Expr = rewrite(parse_quote!("${n}"), &config).unwrap().into_unit();
        let rendered = expr.to_token_stream().to_string();
        assert!(rendered.contains(":: facade :: __private :: Stringify"));
    }

    #[test]
    fn crate_name_must_be_an_identifier() {
        let config = Config::builder().crate_name("not a crate").build();
        let err = rewrite(parse_quote!("${n}"), &config).map(|_: Rewritten<Expr>| ()).unwrap_err();
        assert!(matches!(err, RewriteError::InvalidCrateName { ref name, .. } if name == "not a crate"));
    }

    #[test]
    fn file_level_opt_out() {
        let file: File = parse_quote! {
            #![no_interpolation]
            fn f() -> &'static str {
                "${x}"
            }
        };
        let rewritten = rewrite(file, &Config::default()).unwrap();
        assert!(rewritten.unit().attrs.is_empty());
        assert_eq!(rewritten.stats().skipped, 1);
        assert_eq!(rewritten.stats().interpolated, 0);
    }
}
