//! `hy3-to-json`: convert a parsed Hytek HY3 results tree to JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Reshape, writing meet.hy3.json next to the input
//! hy3-to-json meet.hy3.dump
//!
//! # Explicit output path and 4-space indentation
//! hy3-to-json meet.hy3.dump -o results.json --indent 4
//!
//! # Emit the parser tree without reshaping
//! hy3-to-json meet.hy3.dump --raw
//! ```
//!
//! The path of the written file is printed on stdout.

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hy3_core::ParsedFile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "hy3-to-json",
    version,
    about = "Convert parsed Hytek HY3 meet results to JSON"
)]
struct Cli {
    /// Parsed HY3 results (JSON dump of the parser tree)
    input: PathBuf,

    /// Output file (defaults to the input path with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Country code to fill in where the meet or a team has none
    #[arg(long, default_value = "USA")]
    default_country: String,

    /// Do not reshape; emit the parser tree as loaded
    #[arg(long)]
    raw: bool,

    /// JSON indentation width (0 keeps line breaks without indentation)
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_path = run(&cli)?;
    println!("{}", output_path.display());
    Ok(())
}

/// Load, convert and write. Returns the absolute output path.
fn run(cli: &Cli) -> Result<PathBuf> {
    let input_path = std::path::absolute(&cli.input)
        .with_context(|| format!("Failed to resolve path: {}", cli.input.display()))?;
    let output_path = match &cli.output {
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("Failed to resolve path: {}", path.display()))?,
        None => default_output_path(&input_path),
    };

    let json = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read file: {}", input_path.display()))?;
    let parsed = ParsedFile::from_json(&json)
        .with_context(|| format!("Failed to load parsed results: {}", input_path.display()))?
        .with_default_country(&cli.default_country);
    debug!(
        teams = parsed.meet.teams.len(),
        swimmers = parsed.meet.swimmers.len(),
        events = parsed.meet.events.len(),
        "loaded parsed results"
    );

    let data = if cli.raw {
        parsed.to_raw_value().context("Failed to render parser tree")?
    } else {
        hy3_core::reshape(&parsed).to_value()
    };

    let rendered = render(&data, cli.indent)?;
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
    info!(output = %output_path.display(), raw = cli.raw, "wrote JSON");

    Ok(output_path)
}

/// `<input stem>.json`, or `<input stem>.meet.json` when the input already
/// has a `.json` extension, so the input is never overwritten.
fn default_output_path(input: &Path) -> PathBuf {
    let candidate = input.with_extension("json");
    if candidate == input {
        input.with_extension("meet.json")
    } else {
        candidate
    }
}

/// Pretty-print `value` with `indent` spaces per level. Non-ASCII text is
/// written as-is.
fn render(value: &Value, indent: usize) -> Result<String> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value
        .serialize(&mut serializer)
        .context("Failed to render JSON")?;
    String::from_utf8(buf).context("Rendered JSON is not UTF-8")
}
