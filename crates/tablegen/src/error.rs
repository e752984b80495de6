//! Error types for sqrt-tablegen

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating or writing the table
#[derive(Debug, Error)]
pub enum TableGenError {
  #[error("table length {len} is below the minimum of {min}")]
  InvalidLength { len: usize, min: usize },

  #[error("invalid table length '{raw}': {source}")]
  ParseLength { raw: String, source: ParseIntError },

  #[error("failed to write table to {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}
