//! sqrt-tablegen: build-time generator for the square root seed table
//!
//! Produces a fixed-length table where entry `i` holds `sqrt(i)`, and renders it
//! as Rust source (a `const` length plus a `static` array) for `include!` by the
//! consuming crate. Output depends only on the requested length.

mod error;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

pub use error::TableGenError;

/// Table length used when the build does not ask for another one.
pub const DEFAULT_TABLE_LEN: usize = 4096;

/// Smallest table that keeps the table backend within six significant digits
/// of the platform sqrt after its single refinement step.
pub const MIN_TABLE_LEN: usize = 2048;

/// Result type for table generation
pub type Result<T> = std::result::Result<T, TableGenError>;

/// Compute `len` entries where entry `i` is `sqrt(i)`.
///
/// # Errors
///
/// Returns [`TableGenError::InvalidLength`] if `len` is below [`MIN_TABLE_LEN`].
pub fn generate_table(len: usize) -> Result<Vec<f64>> {
  if len < MIN_TABLE_LEN {
    return Err(TableGenError::InvalidLength {
      len,
      min: MIN_TABLE_LEN,
    });
  }

  Ok((0..len).map(|i| (i as f64).sqrt()).collect())
}

/// Render the table of `len` entries as a Rust source file.
///
/// The output declares `SQRT_TABLE_LEN` and `SQRT_TABLE` side by side so the
/// array length and the bound used for index clamping come from one place.
pub fn render_table(len: usize) -> Result<String> {
  let table = generate_table(len)?;

  let mut out = String::with_capacity(len * 24 + 256);
  out.push_str("// @generated by sqrt-tablegen. Do not edit.\n");
  out.push_str("//\n");
  out.push_str("// Entry i holds sqrt(i).\n\n");
  out.push_str(&format!("pub const SQRT_TABLE_LEN: usize = {};\n\n", table.len()));
  out.push_str("pub static SQRT_TABLE: [f64; SQRT_TABLE_LEN] = [\n");
  for value in &table {
    out.push_str(&format!("  {:?},\n", value));
  }
  out.push_str("];\n");

  debug!(len, bytes = out.len(), "rendered sqrt table");
  Ok(out)
}

/// Render the table and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the length is invalid or the destination cannot be written.
pub fn write_table(len: usize, path: &Path) -> Result<()> {
  let source = render_table(len)?;

  fs::write(path, source).map_err(|e| TableGenError::Write {
    path: path.to_path_buf(),
    source: e,
  })?;

  info!(path = %path.display(), len, "wrote sqrt table");
  Ok(())
}

/// Parse a table length as given to the build, e.g. via `SQRT_TABLE_LEN`.
pub fn parse_len(raw: &str) -> Result<usize> {
  let len = raw
    .trim()
    .parse::<usize>()
    .map_err(|e| TableGenError::ParseLength {
      raw: raw.to_string(),
      source: e,
    })?;

  if len < MIN_TABLE_LEN {
    return Err(TableGenError::InvalidLength {
      len,
      min: MIN_TABLE_LEN,
    });
  }
  Ok(len)
}
