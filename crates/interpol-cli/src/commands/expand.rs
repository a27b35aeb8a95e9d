//! Implementation of the `interpol expand` command.

use std::path::PathBuf;

use clap::Args;
use interpol_engine::rewrite;
use miette::Result;
use quote::ToTokens;

use super::{read_source, RewriteOptions};
use crate::output::InterpolDiagnostic;

/// Arguments for the expand command.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Rust source file to expand
    pub file: PathBuf,

    #[command(flatten)]
    pub options: RewriteOptions,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> Result<i32> {
    let content = match read_source(&args.file) {
        Ok(content) => content,
        Err(message) => {
            eprintln!("{message}");
            return Ok(exitcode::NOINPUT);
        }
    };

    let unit = syn::parse_file(&content)
        .map_err(|e| InterpolDiagnostic::from_syn_error(&args.file, &content, &e))?;
    let rewritten = rewrite(unit, &args.options.config())
        .map_err(|e| InterpolDiagnostic::from_rewrite_error(&args.file, &content, &e))?;

    let stats = rewritten.stats();
    tracing::debug!(interpolated = stats.interpolated, "expanded file");
    println!("{}", rewritten.into_unit().into_token_stream());
    Ok(exitcode::OK)
}
