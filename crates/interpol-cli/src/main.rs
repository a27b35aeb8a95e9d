//! Interpol CLI entry point.
//!
//! Provides command-line tools for working with interpolated Rust sources:
//! - `interpol tokenize` - Show how a literal splits into segments
//! - `interpol check` - Rewrite files and report interpolation errors
//! - `interpol expand` - Print a rewritten file

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_expand, run_tokenize, CheckArgs, ExpandArgs, TokenizeArgs};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `${...}` string interpolation tools.
#[derive(Debug, Parser)]
#[command(name = "interpol")]
#[command(about = "Tools for ${...} interpolated Rust sources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a string literal's text into segments
    Tokenize(TokenizeArgs),
    /// Rewrite Rust files and report interpolation errors
    Check(CheckArgs),
    /// Print a Rust file after interpolation
    Expand(ExpandArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR, FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` refines the level chosen by `--verbose`.
fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Tokenize(args) => run_tokenize(args),
        Commands::Check(args) => run_check(args),
        Commands::Expand(args) => run_expand(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
