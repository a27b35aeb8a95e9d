//! `${expr}` interpolation inside Rust string literals.
//!
//! Put `#[interpolate]` on an item and every string literal in it may embed
//! Rust expressions. The literal is rewritten at compile time into code that
//! concatenates the literal text with each expression's `Display` form, so
//! there is no runtime template engine and type errors point into the
//! literal.
//!
//! ```
//! use interpol::interpolate;
//!
//! #[interpolate]
//! fn sum(x: i32, y: i32) -> String {
//!     "${x} + ${y} = ${x + y}"
//! }
//!
//! assert_eq!(sum(3, 4), "3 + 4 = 7");
//! ```
//!
//! # Opting out
//!
//! `#[no_interpolation]` on a type, function or variable declaration keeps
//! every literal inside it verbatim. Attribute arguments such as
//! `#[doc = "..."]` are never rewritten.
//!
//! ```
//! use interpol::interpolate;
//!
//! #[interpolate]
//! mod templates {
//!     #[no_interpolation]
//!     pub fn raw() -> &'static str {
//!         "${name}"
//!     }
//! }
//!
//! assert_eq!(templates::raw(), "${name}");
//! ```
//!
//! # Escapes
//!
//! A backslash before `$` (written `"\\$"` or `r"\$"`) produces a literal
//! `$`. Alternatively `${'$'}` is an ordinary expression that renders as `$`.

mod stringify;

pub use interpol_macros::{interpolate, no_interpolation};
pub use interpol_syntax::{Segment, SegmentKind, TokenizeError, render, tokenize};

/// Items referenced by expanded code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::stringify::Stringify;

    /// Glob-imported by explicit-mode expansions.
    pub mod kind {
        pub use crate::stringify::{DisplayToString, OptionToString};
    }
}
