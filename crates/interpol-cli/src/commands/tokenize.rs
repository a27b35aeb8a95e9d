//! Implementation of the `interpol tokenize` command.

use clap::Args;
use interpol_syntax::{tokenize, Segment};
use miette::Result;

use crate::output::table::format_segment_table;

/// Arguments for the tokenize command.
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Literal text to split (the string's value, without quotes)
    pub text: String,

    /// Offset added to every segment
    #[arg(long, default_value_t = 0)]
    pub base_offset: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<i32> {
    let segments: Vec<Segment> = match tokenize(&args.text, args.base_offset) {
        Ok(segments) => segments,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{output:#}");
            } else {
                eprintln!("Tokenize error: {e}");
            }
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        let output = serde_json::to_string_pretty(&segments)
            .map_err(|e| miette::miette!("Failed to serialize segments: {e}"))?;
        println!("{output}");
    } else if segments.is_empty() {
        println!("(no segments)");
    } else {
        println!("{}", format_segment_table(&segments));
    }

    Ok(exitcode::OK)
}
