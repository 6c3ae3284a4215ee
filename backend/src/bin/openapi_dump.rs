//! Print or write the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use garden_journal::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Export the garden journal OpenAPI document", version)]
struct CliArgs {
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
    /// Emit compact JSON.
    #[arg(long)]
    compact: bool,
}

fn render(compact: bool) -> io::Result<String> {
    let doc = ApiDoc::openapi();
    let rendered = if compact {
        doc.to_json()
    } else {
        doc.to_pretty_json()
    };
    rendered.map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let json = render(args.compact)?;
    match args.output {
        Some(path) => std::fs::write(path, json),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
