//! CLI command implementations.

mod check;
mod expand;
mod tokenize;

use std::fs::read_to_string;
use std::path::Path;

use interpol_engine::{Config, StringificationMode};

pub use check::{run_check, CheckArgs, FileReport};
pub use expand::{run_expand, ExpandArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};

/// Rewrite options shared by `check` and `expand`.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct RewriteOptions {
    /// Render `Option` contents directly and `None` as "null"
    #[arg(long)]
    pub explicit_to_string: bool,

    /// Keep `\$` as two characters instead of a literal `$`
    #[arg(long)]
    pub no_backslash_escapes: bool,
}

impl RewriteOptions {
    pub fn config(self) -> Config {
        Config::builder()
            .mode(StringificationMode::from_explicit_flag(self.explicit_to_string))
            .backslash_escapes(!self.no_backslash_escapes)
            .build()
    }
}

/// Read a source file, mapping failure to a message for stderr.
fn read_source(path: &Path) -> Result<String, String> {
    read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}
