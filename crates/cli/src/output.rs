//! CLI output formatting utilities.
//!
//! Provides number rendering in the style of C's `%g`, JSON output, and colored
//! error messages on stderr.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

/// Significant digits used when printing numbers.
pub const SIGNIFICANT_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
}

/// Render `value` like C's `%g` with `precision` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in `[-4, precision)`,
/// scientific notation otherwise; trailing zeros are dropped in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
  if value.is_nan() {
    return "nan".to_string();
  }
  if value.is_infinite() {
    return if value > 0.0 { "inf" } else { "-inf" }.to_string();
  }
  if value == 0.0 {
    return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
  }

  let precision = precision.max(1);
  // The exponent has to come from the rounded value: 9.999995 prints as 10.
  let scientific = format!("{:.*e}", precision - 1, value);
  let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
  let exponent: i32 = exponent.parse().unwrap_or(0);

  if exponent < -4 || exponent >= precision as i32 {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
  } else {
    let decimals = (precision as i32 - 1 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
  }
}

/// Render a number the way the CLI prints it.
pub fn format_number(value: f64) -> String {
  format_general(value, SIGNIFICANT_DIGITS)
}

fn trim_fraction(s: &str) -> &str {
  if s.contains('.') {
    s.trim_end_matches('0').trim_end_matches('.')
  } else {
    s
  }
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
