mod output;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sqrt_core::Backend;

use crate::output::{OutputFormat, format_number, print_error, print_json};

/// Compute the square root of a number
#[derive(Parser)]
#[command(name = "sqrt")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// The number to take the square root of
  #[arg(allow_negative_numbers = true)]
  number: Option<String>,

  /// Square root implementation: table or precise (default set at build time)
  #[arg(short, long, env = "SQRT_BACKEND")]
  backend: Option<Backend>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
  input: f64,
  result: f64,
  backend: &'static str,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<ExitCode> {
  let Some(raw) = cli.number else {
    print_usage();
    return Ok(ExitCode::from(1));
  };

  let input = parse_number(&raw)?;
  let backend = cli.backend.unwrap_or_default();
  debug!(%backend, input, "computing square root");

  let result = backend.implementation().sqrt(input);

  if cli.output.is_json() {
    print_json(&Report {
      input,
      result,
      backend: backend.as_str(),
    })?;
  } else {
    println!(
      "The square root of {} is {}",
      format_number(input),
      format_number(result)
    );
  }

  Ok(ExitCode::SUCCESS)
}

fn parse_number(raw: &str) -> Result<f64> {
  raw
    .trim()
    .parse::<f64>()
    .with_context(|| format!("Invalid number: '{}'", raw))
}

/// Basename of the invoked executable, falling back to the command name.
fn program_name() -> String {
  std::env::args_os()
    .next()
    .as_deref()
    .map(Path::new)
    .and_then(Path::file_name)
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| "sqrt".to_string())
}

fn print_usage() {
  let name = program_name();
  println!(
    "{} Version {}.{}",
    name,
    env!("CARGO_PKG_VERSION_MAJOR"),
    env!("CARGO_PKG_VERSION_MINOR")
  );
  println!("Usage: {} number", name);
}
