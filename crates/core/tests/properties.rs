//! Numeric properties of the square root backends.

use proptest::prelude::*;
use sqrt_core::{Backend, approximate_sqrt, max_relative_error, precise_sqrt, table_len};

/// `|root^2 - x| / max(x, 1)`, computed without overflowing near `f64::MAX`.
fn squared_error(root: f64, x: f64) -> f64 {
  if x > 1.0 {
    ((root / x) * root - 1.0).abs()
  } else {
    (root * root - x).abs()
  }
}

proptest! {
  #[test]
  fn approximation_is_non_negative_and_bounded(x in 0.0f64..1e12) {
    let root = approximate_sqrt(x);
    prop_assert!(root >= 0.0);
    prop_assert!(squared_error(root, x) < 0.05, "sqrt({}) = {}", x, root);
  }

  #[test]
  fn approximation_is_bounded_for_any_positive_float(x in proptest::num::f64::POSITIVE | proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL) {
    let root = approximate_sqrt(x);
    prop_assert!(root >= 0.0);
    prop_assert!(squared_error(root, x) < 0.05, "sqrt({}) = {}", x, root);
  }

  #[test]
  fn negative_inputs_are_nan(x in proptest::num::f64::NEGATIVE) {
    prop_assert!(approximate_sqrt(x).is_nan());
  }

  #[test]
  fn backends_agree_closely(x in 1e-6f64..1e9) {
    let approx = Backend::Table.implementation().sqrt(x);
    let precise = Backend::Precise.implementation().sqrt(x);
    prop_assert!(
      (approx - precise).abs() / precise <= max_relative_error(),
      "sqrt({}): {} vs {}",
      x,
      approx,
      precise
    );
  }

  #[test]
  fn approximation_is_deterministic(x in 0.0f64..1e6) {
    prop_assert_eq!(approximate_sqrt(x).to_bits(), approximate_sqrt(x).to_bits());
  }
}

#[test]
fn zero_maps_to_zero() {
  assert_eq!(approximate_sqrt(0.0), 0.0);
  assert_eq!(precise_sqrt(0.0), 0.0);
}

#[test]
fn table_length_supports_six_digit_output() {
  assert!(table_len() >= 2048);
  assert!(max_relative_error() < 1e-6);
}

#[test]
fn shared_across_threads() {
  let handles: Vec<_> = (1..=8)
    .map(|i| std::thread::spawn(move || Backend::Table.implementation().sqrt((i * i) as f64)))
    .collect();

  for (i, handle) in (1..=8).zip(handles) {
    assert_eq!(handle.join().unwrap(), i as f64);
  }
}
