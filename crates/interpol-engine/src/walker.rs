//! Scope-tracking traversal shared by the escape and interpolation passes.
//!
//! The walker is a `syn::fold::Fold`: every node is taken by value and a
//! replacement is returned. Declarations spawn a child walker carrying the
//! derived scope; the child's results are merged back once its subtree has
//! been folded, so no scope is ever saved and restored.

use syn::fold::{self, Fold};
use syn::{
    Attribute, Expr, ExprLit, Field, ImplItemConst, ImplItemFn, ItemConst, ItemEnum, ItemFn,
    ItemImpl, ItemMod, ItemStatic, ItemStruct, ItemTrait, ItemUnion, Lit, Local, TraitItemConst,
    TraitItemFn,
};

use crate::error::RewriteError;
use crate::scope::{Markers, Scope};

/// Result of rewriting one string literal.
#[derive(Debug)]
pub(crate) enum Outcome {
    Unchanged,
    Single(Expr),
    Concatenation(Expr),
}

/// A rewrite applied to every string literal in an enabled scope.
pub(crate) trait LiteralPass {
    fn rewrite_literal(&self, lit: &ExprLit) -> Result<Outcome, RewriteError>;

    /// Whether markers are removed from declarations after being read.
    fn strips_markers(&self) -> bool {
        false
    }
}

/// Counts of string literals seen during a rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Literals replaced by an expression or a concatenation.
    pub interpolated: usize,
    /// Literals in enabled scopes that needed no change.
    pub unchanged: usize,
    /// Literals left alone because interpolation was disabled.
    pub skipped: usize,
}

impl RewriteStats {
    fn absorb(&mut self, other: RewriteStats) {
        self.interpolated += other.interpolated;
        self.unchanged += other.unchanged;
        self.skipped += other.skipped;
    }
}

pub(crate) struct ScopeWalker<'p, P> {
    pass: &'p P,
    markers: &'p Markers,
    scope: Scope,
    stats: RewriteStats,
    error: Option<RewriteError>,
}

impl<'p, P: LiteralPass> ScopeWalker<'p, P> {
    pub fn new(pass: &'p P, markers: &'p Markers, scope: Scope) -> Self {
        ScopeWalker {
            pass,
            markers,
            scope,
            stats: RewriteStats::default(),
            error: None,
        }
    }

    /// Finish the walk. The first error aborts the whole unit.
    pub fn finish(self) -> Result<RewriteStats, RewriteError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }

    /// Fold `node` with a child walker in `scope`.
    fn descend<T>(&mut self, scope: Scope, node: T, fold: impl FnOnce(&mut Self, T) -> T) -> T {
        let mut child = ScopeWalker::new(self.pass, self.markers, scope);
        let node = fold(&mut child, node);
        self.stats.absorb(child.stats);
        if self.error.is_none() {
            self.error = child.error;
        }
        node
    }

    /// Scope of a declaration carrying `attrs`.
    fn declaration_scope(&self, attrs: &mut Vec<Attribute>) -> Scope {
        let scope = self.scope.enter(self.markers.has_opt_out(attrs));
        if self.pass.strips_markers() {
            self.markers.strip(attrs);
        }
        scope
    }

    fn visit_literal(&mut self, lit: ExprLit) -> Expr {
        if self.error.is_some() {
            return Expr::Lit(lit);
        }
        if self.scope.is_skipped() {
            self.stats.skipped += 1;
            return Expr::Lit(lit);
        }
        match self.pass.rewrite_literal(&lit) {
            Ok(Outcome::Unchanged) => {
                self.stats.unchanged += 1;
                Expr::Lit(lit)
            }
            Ok(Outcome::Single(expr) | Outcome::Concatenation(expr)) => {
                self.stats.interpolated += 1;
                expr
            }
            Err(err) => {
                self.error = Some(err);
                Expr::Lit(lit)
            }
        }
    }
}

/// Plain string literals in expression position. Byte, C and suffixed
/// strings are never interpolated.
fn is_candidate(lit: &ExprLit) -> bool {
    matches!(&lit.lit, Lit::Str(string) if string.suffix().is_empty())
}

macro_rules! scoping_constructs {
    ($($method:ident: $node:ty;)*) => {
        $(
            fn $method(&mut self, mut node: $node) -> $node {
                let scope = self.declaration_scope(&mut node.attrs);
                self.descend(scope, node, fold::$method)
            }
        )*
    };
}

impl<P: LiteralPass> Fold for ScopeWalker<'_, P> {
    scoping_constructs! {
        // Types
        fold_item_struct: ItemStruct;
        fold_item_enum: ItemEnum;
        fold_item_union: ItemUnion;
        fold_item_trait: ItemTrait;
        fold_item_impl: ItemImpl;
        fold_item_mod: ItemMod;
        // Functions
        fold_item_fn: ItemFn;
        fold_impl_item_fn: ImplItemFn;
        fold_trait_item_fn: TraitItemFn;
        // Variables
        fold_local: Local;
        fold_item_const: ItemConst;
        fold_item_static: ItemStatic;
        fold_impl_item_const: ImplItemConst;
        fold_trait_item_const: TraitItemConst;
        fold_field: Field;
    }

    fn fold_attribute(&mut self, node: Attribute) -> Attribute {
        self.descend(Scope::excluded(), node, fold::fold_attribute)
    }

    fn fold_expr(&mut self, node: Expr) -> Expr {
        match node {
            Expr::Lit(lit) if is_candidate(&lit) => self.visit_literal(lit),
            other => fold::fold_expr(self, other),
        }
    }
}
