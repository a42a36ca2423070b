//! CLI utility helpers

use serde::Serialize;
use shipfee::{Error, Result};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn parse_format_name(name: &str) -> Result<OutputFormat> {
    match name.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        other => Err(format!("Unknown format: {}", other).into()),
    }
}

/// Parse --format argument (default: text)
///
/// Accepts `--format <fmt>`, `-f <fmt>` and `--format=<fmt>`.
pub fn parse_format_arg(args: &[String]) -> Result<OutputFormat> {
    for (i, arg) in args.iter().enumerate() {
        if let Some(name) = arg.strip_prefix("--format=") {
            return parse_format_name(name);
        }
        if arg == "--format" || arg == "-f" {
            return match args.get(i + 1) {
                Some(name) => parse_format_name(name),
                None => Err(Error::Usage("--format <text|json|yaml>".into())),
            };
        }
    }
    Ok(OutputFormat::Text)
}

/// Split arguments into positionals, rejecting any `--flag` not in `flags`.
///
/// `--format`/`-f` (with its value) and `--format=<fmt>` are always allowed
/// and never returned. A single leading dash is kept so negative numbers
/// stay positional.
pub fn positional_args<'a>(args: &'a [String], flags: &[&str]) -> Result<Vec<&'a str>> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if arg == "--format" || arg == "-f" {
            skip_next = true;
        } else if arg.starts_with("--format=") || flags.contains(&arg.as_str()) {
            continue;
        } else if arg.starts_with("--") {
            return Err(Error::Usage(format!("unknown option: {}", arg)));
        } else {
            out.push(arg.as_str());
        }
    }
    Ok(out)
}

/// Print `value` in the requested format, using `report` for text
pub fn print_output<T: Serialize>(format: OutputFormat, value: &T, report: &str) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_norway::to_string(value)?),
    }
    Ok(())
}
