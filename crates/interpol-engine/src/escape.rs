//! Escape pre-pass: neutralizes `\$` before any literal is tokenized.

use std::borrow::Cow;

use interpol_syntax::escape_backslashes;
use syn::{Expr, ExprLit, Lit, LitStr};

use crate::config::StringificationMode;
use crate::error::RewriteError;
use crate::walker::{LiteralPass, Outcome};

pub(crate) struct EscapePass {
    trigger: &'static str,
}

impl EscapePass {
    pub fn new(mode: StringificationMode) -> Self {
        EscapePass {
            trigger: mode.escaped_trigger(),
        }
    }
}

impl LiteralPass for EscapePass {
    fn rewrite_literal(&self, lit: &ExprLit) -> Result<Outcome, RewriteError> {
        let Lit::Str(string) = &lit.lit else {
            return Ok(Outcome::Unchanged);
        };
        let value = string.value();
        match escape_backslashes(&value, self.trigger) {
            Cow::Borrowed(_) => Ok(Outcome::Unchanged),
            Cow::Owned(escaped) => Ok(Outcome::Single(Expr::Lit(ExprLit {
                attrs: lit.attrs.clone(),
                lit: Lit::Str(LitStr::new(&escaped, string.span())),
            }))),
        }
    }
}
