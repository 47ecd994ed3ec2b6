//! Output formatting and display utilities for numviz CLI

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::error::CliResult;
use crate::{Args, OutputFormat};

/// Print a result in the selected format.
///
/// Text output is produced by `text`, which is only called in text mode.
pub(crate) fn emit<T, F>(args: &Args, value: &T, text: F) -> CliResult<()>
where
    T: Serialize,
    F: FnOnce() -> CliResult<()>,
{
    match args.format {
        OutputFormat::Text => text(),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
            Ok(())
        }
    }
}

/// Print colored output to stdout
pub(crate) fn println_colored(args: &Args, text: &str, color: Option<owo_colors::AnsiColors>) {
    if args.no_color {
        println!("{}", text);
    } else if let Some(c) = color {
        println!("{}", text.if_supports_color(Stream::Stdout, |t| t.color(c)));
    } else {
        println!("{}", text);
    }
}

/// Print a dimmed status line to stderr
pub(crate) fn eprintln_status(args: &Args, text: &str) {
    if args.no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.dimmed()));
    }
}

/// Print colored error message to stderr
pub(crate) fn eprintln_colored(args: &Args, text: &str) {
    if args.no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.red()));
    }
}

/// Fixed-width number for table columns
pub(crate) fn format_cell(x: f64) -> String {
    format!("{:>14.6}", x)
}
