use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sqrt_tablegen::{DEFAULT_TABLE_LEN, write_table};

/// Generate the square root seed table as Rust source
#[derive(Parser)]
#[command(name = "make-table")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// File to write the generated table to
  output: PathBuf,

  /// Number of table entries
  #[arg(short, long, default_value_t = DEFAULT_TABLE_LEN)]
  len: usize,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  write_table(cli.len, &cli.output).with_context(|| format!("Failed to generate {}", cli.output.display()))?;

  Ok(())
}
