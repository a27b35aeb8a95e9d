//! Implementation of the `interpol check` command.

use std::path::{Path, PathBuf};

use clap::Args;
use interpol_engine::{rewrite, Config, RewriteStats};
use miette::{Report, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{read_source, RewriteOptions};
use crate::output::table::format_report_table;
use crate::output::InterpolDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rust source files to check, each rewritten as one unit
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub options: RewriteOptions,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Rewrite outcome for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub stats: ReportStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Literal counts, as reported for one file.
#[derive(Debug, Default, Serialize)]
pub struct ReportStats {
    pub interpolated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl From<RewriteStats> for ReportStats {
    fn from(stats: RewriteStats) -> Self {
        ReportStats {
            interpolated: stats.interpolated,
            unchanged: stats.unchanged,
            skipped: stats.skipped,
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let config = args.options.config();
    let mut reports = Vec::new();
    let mut unreadable = false;

    for path in &args.files {
        let content = match read_source(path) {
            Ok(content) => content,
            Err(message) => {
                eprintln!(
                    "{} {message}",
                    "error:".if_supports_color(Stream::Stderr, |t| t.red())
                );
                unreadable = true;
                continue;
            }
        };
        reports.push(check_file(path, &content, &config, !args.json));
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Failed to serialize report: {e}"))?;
        println!("{output}");
    } else if !reports.is_empty() {
        println!("{}", format_report_table(&reports));
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if !args.json {
        if failed == 0 && !unreadable {
            println!(
                "{} {} file(s) rewritten",
                "ok:".if_supports_color(Stream::Stdout, |t| t.green()),
                reports.len()
            );
        } else if failed > 0 {
            eprintln!(
                "{} {failed} file(s) failed to rewrite",
                "error:".if_supports_color(Stream::Stderr, |t| t.red())
            );
        }
    }

    if unreadable {
        Ok(exitcode::NOINPUT)
    } else if failed > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Rewrite one file. Diagnostics are printed when `render` is set.
fn check_file(path: &Path, content: &str, config: &Config, render: bool) -> FileReport {
    let file = path.display().to_string();

    let diagnostic = match syn::parse_file(content) {
        Err(e) => InterpolDiagnostic::from_syn_error(path, content, &e),
        Ok(unit) => match rewrite(unit, config) {
            Ok(rewritten) => {
                tracing::debug!(%file, "rewrite succeeded");
                return FileReport {
                    file,
                    stats: rewritten.stats().into(),
                    error: None,
                };
            }
            Err(e) => InterpolDiagnostic::from_rewrite_error(path, content, &e),
        },
    };

    let error = diagnostic.to_string();
    if render {
        eprintln!("{:?}", Report::new(diagnostic));
    }
    FileReport {
        file,
        stats: ReportStats::default(),
        error: Some(error),
    }
}
