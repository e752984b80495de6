//! The generated seed table and the lookups over it.
//!
//! `SQRT_TABLE_LEN` and `SQRT_TABLE` come from the file `build.rs` writes into
//! `OUT_DIR`. The array type ties its length to the constant, so the bound used
//! below cannot disagree with the data.

include!(concat!(env!("OUT_DIR"), "/sqrt_table.rs"));

const _: () = assert!(SQRT_TABLE_LEN >= 2048, "sqrt table must hold at least 2048 entries");

/// Upper bound (exclusive) of the reduced domain.
const DOMAIN_HIGH: f64 = SQRT_TABLE_LEN as f64;

/// Lower bound (inclusive) of the reduced domain. One power of four below the top.
const DOMAIN_LOW: f64 = DOMAIN_HIGH / 4.0;

/// Number of entries in the seed table.
pub fn table_len() -> usize {
  SQRT_TABLE_LEN
}

/// Worst-case relative error of the table backend against the exact root.
///
/// The floor-indexed seed is off by at most `2/N` in the domain `[N/4, N)`, and one
/// Newton step squares that down to about `2/N^2`. The bound doubles it and adds a
/// few ulps for the final rounding.
pub fn max_relative_error() -> f64 {
  let n = SQRT_TABLE_LEN as f64;
  4.0 / (n * n) + 4.0 * f64::EPSILON
}

/// Scale a finite positive `x` by powers of four into `[N/4, N)`.
///
/// Returns `(y, k)` with `y == x * 4^k` exactly, so `sqrt(x) == sqrt(y) * 2^-k`.
pub(crate) fn reduce(x: f64) -> (f64, i32) {
  let mut y = x;
  let mut k = 0;
  while y < DOMAIN_LOW {
    y *= 4.0;
    k += 1;
  }
  while y >= DOMAIN_HIGH {
    y *= 0.25;
    k -= 1;
  }
  (y, k)
}

/// Floor-indexed table entry for `y`, with the index clamped to the last entry.
pub(crate) fn seed(y: f64) -> f64 {
  let index = (y as usize).min(SQRT_TABLE_LEN - 1);
  SQRT_TABLE[index]
}
