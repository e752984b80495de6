//! Error types for sqrt-core

use thiserror::Error;

/// Errors from parsing a backend name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendParseError {
  #[error("unknown sqrt backend '{0}' (expected 'table' or 'precise')")]
  Unknown(String),
}
