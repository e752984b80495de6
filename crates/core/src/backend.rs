//! Square root backends.
//!
//! Both implementations sit behind [`SquareRoot`]; [`Backend`] names them so the
//! choice can be made once, from a cargo feature or from runtime configuration.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::BackendParseError;
use crate::table;

/// A square root implementation.
///
/// Implementations are total over IEEE-754: negative inputs give NaN, and NaN or
/// infinite inputs propagate the way `f64::sqrt` does.
pub trait SquareRoot: Send + Sync {
  /// Short identifier, matching the [`Backend`] name.
  fn name(&self) -> &'static str;

  /// Square root of `x`.
  fn sqrt(&self, x: f64) -> f64;
}

/// Delegates to the platform `f64::sqrt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreciseSqrt;

impl SquareRoot for PreciseSqrt {
  fn name(&self) -> &'static str {
    Backend::Precise.as_str()
  }

  fn sqrt(&self, x: f64) -> f64 {
    precise_sqrt(x)
  }
}

/// Seeds from the generated table and refines with one Newton-Raphson step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSqrt;

impl SquareRoot for TableSqrt {
  fn name(&self) -> &'static str {
    Backend::Table.as_str()
  }

  fn sqrt(&self, x: f64) -> f64 {
    approximate_sqrt(x)
  }
}

/// Platform square root.
#[inline]
pub fn precise_sqrt(x: f64) -> f64 {
  x.sqrt()
}

/// Table-seeded square root with a single Newton-Raphson refinement.
///
/// `x` is scaled by an exact power of four into the table's domain, the entry at
/// the floor of the scaled value seeds the estimate, and one step of
/// `e = (e + y / e) / 2` refines it before the scale is undone. Zero (of either
/// sign) and `+inf` are returned unchanged; negative and NaN inputs give NaN.
pub fn approximate_sqrt(x: f64) -> f64 {
  if x.is_nan() || x < 0.0 {
    return f64::NAN;
  }
  if x == 0.0 || x == f64::INFINITY {
    return x;
  }

  let (y, k) = table::reduce(x);
  let seed = table::seed(y);
  let refined = 0.5 * (seed + y / seed);
  let result = refined * 2f64.powi(-k);

  trace!(x, y, seed, result, "computed approximate sqrt");
  result
}

/// The available square root implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
  /// Table-seeded approximation ([`TableSqrt`])
  Table,
  /// Platform square root ([`PreciseSqrt`])
  Precise,
}

impl Backend {
  pub const ALL: [Backend; 2] = [Backend::Table, Backend::Precise];

  pub const fn as_str(&self) -> &'static str {
    match self {
      Backend::Table => "table",
      Backend::Precise => "precise",
    }
  }

  /// The implementation this backend names.
  pub fn implementation(self) -> &'static dyn SquareRoot {
    match self {
      Backend::Table => &TableSqrt,
      Backend::Precise => &PreciseSqrt,
    }
  }
}

impl Default for Backend {
  #[cfg(feature = "table")]
  fn default() -> Self {
    Backend::Table
  }

  #[cfg(not(feature = "table"))]
  fn default() -> Self {
    Backend::Precise
  }
}

impl fmt::Display for Backend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Backend {
  type Err = BackendParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "table" => Ok(Backend::Table),
      "precise" => Ok(Backend::Precise),
      _ => Err(BackendParseError::Unknown(s.to_string())),
    }
  }
}

/// Square root using the default backend.
pub fn sqrt(x: f64) -> f64 {
  Backend::default().implementation().sqrt(x)
}
