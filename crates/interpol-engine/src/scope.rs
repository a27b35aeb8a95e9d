//! Interpolation scope and the attributes that change it.

use syn::{Attribute, Meta, Path};

/// Name of the zero-argument opt-out marker attribute.
pub const OPT_OUT_MARKER: &str = "no_interpolation";

/// Name of the attribute macro that enables interpolation.
pub const INTERPOLATE_MARKER: &str = "interpolate";

/// Whether interpolation applies in the current lexical region.
///
/// Scopes are plain values: each declaration derives its own scope from the
/// enclosing one, and the enclosing scope is never modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    skip: bool,
}

impl Scope {
    /// Scope at the root of a compilation unit: interpolation enabled.
    pub const fn root() -> Self {
        Scope { skip: false }
    }

    /// Scope of attribute arguments: interpolation always disabled.
    pub const fn excluded() -> Self {
        Scope { skip: true }
    }

    /// Scope of a nested declaration. Once skipped, always skipped.
    pub fn enter(self, opted_out: bool) -> Self {
        Scope {
            skip: self.skip || opted_out,
        }
    }

    pub fn is_skipped(self) -> bool {
        self.skip
    }
}

/// Recognizes the marker attributes by path.
///
/// Matching is by identity on the written path: `no_interpolation`,
/// `interpol::no_interpolation` or `::interpol::no_interpolation` (for the
/// configured crate name). Anything else, including paths that would not
/// resolve, is simply not a marker.
#[derive(Debug, Clone)]
pub struct Markers {
    crate_name: String,
}

impl Markers {
    pub fn new(crate_name: impl Into<String>) -> Self {
        Markers {
            crate_name: crate_name.into(),
        }
    }

    /// The opt-out marker. Only the bare, argument-free form counts.
    pub fn is_opt_out(&self, attr: &Attribute) -> bool {
        matches!(&attr.meta, Meta::Path(path) if self.names(path, OPT_OUT_MARKER))
    }

    /// The `#[interpolate]` attribute, with or without arguments.
    pub fn is_interpolate(&self, attr: &Attribute) -> bool {
        match &attr.meta {
            Meta::Path(path) => self.names(path, INTERPOLATE_MARKER),
            Meta::List(list) => self.names(&list.path, INTERPOLATE_MARKER),
            Meta::NameValue(_) => false,
        }
    }

    pub fn has_opt_out(&self, attrs: &[Attribute]) -> bool {
        attrs.iter().any(|attr| self.is_opt_out(attr))
    }

    /// Remove markers that have no meaning once the unit is rewritten.
    pub fn strip(&self, attrs: &mut Vec<Attribute>) {
        attrs.retain(|attr| !self.is_opt_out(attr) && !self.is_interpolate(attr));
    }

    fn names(&self, path: &Path, marker: &str) -> bool {
        if path
            .segments
            .iter()
            .any(|segment| !segment.arguments.is_none())
        {
            return false;
        }
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        match segments.as_slice() {
            [only] => path.leading_colon.is_none() && only == marker,
            [krate, last] => *krate == self.crate_name && last == marker,
            _ => false,
        }
    }
}
