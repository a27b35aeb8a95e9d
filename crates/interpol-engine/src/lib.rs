//! Scope-aware syntax tree rewriter for `${...}` string interpolation.
//!
//! Given a parsed compilation unit, [`rewrite`] replaces every string literal
//! containing `${expr}` markers with an expression that builds the same text
//! at runtime, splicing each embedded expression in as real Rust code.
//!
//! Literals are left alone inside declarations marked `#[no_interpolation]`
//! (and everything nested in them) and inside attribute arguments. A
//! malformed literal aborts the whole unit with a [`RewriteError`] pointing
//! at the original source.
//!
//! ```
//! use interpol_engine::{Config, rewrite};
//!
//! let expr: syn::Expr = syn::parse_quote!("${x} + ${y} = ${x + y}");
//! let rewritten = rewrite(expr, &Config::default()).unwrap();
//! assert!(matches!(rewritten.unit(), syn::Expr::Paren(_)));
//! ```

mod config;
mod error;
mod escape;
mod fragment;
mod rewrite;
mod scope;
mod unit;
mod walker;

pub use config::{Config, DEFAULT_CRATE_NAME, StringificationMode};
pub use error::RewriteError;
pub use rewrite::{Rewritten, rewrite};
pub use scope::{INTERPOLATE_MARKER, Markers, OPT_OUT_MARKER};
pub use unit::CompilationUnit;
pub use walker::RewriteStats;
