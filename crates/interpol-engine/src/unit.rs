//! Compilation units the engine can rewrite.

use syn::fold::Fold;
use syn::{Attribute, Expr, File, Item};

/// A self-contained tree that is rewritten once, as a whole.
pub trait CompilationUnit: Sized {
    /// Fold the whole unit.
    fn fold_with<F: Fold>(self, folder: &mut F) -> Self;

    /// Attributes on the unit root that are not owned by any declaration,
    /// such as a file's inner attributes.
    fn root_attributes(&mut self) -> Option<&mut Vec<Attribute>> {
        None
    }
}

impl CompilationUnit for File {
    fn fold_with<F: Fold>(self, folder: &mut F) -> Self {
        folder.fold_file(self)
    }

    fn root_attributes(&mut self) -> Option<&mut Vec<Attribute>> {
        Some(&mut self.attrs)
    }
}

impl CompilationUnit for Item {
    fn fold_with<F: Fold>(self, folder: &mut F) -> Self {
        folder.fold_item(self)
    }
}

impl CompilationUnit for Expr {
    fn fold_with<F: Fold>(self, folder: &mut F) -> Self {
        folder.fold_expr(self)
    }
}
