//! build.rs - Generates the square root seed table
//!
//! Writes `sqrt_table.rs` into `OUT_DIR`; `src/table.rs` pulls it in with
//! `include!`. Set `SQRT_TABLE_LEN` to build with a table of another length.

use std::path::PathBuf;

use sqrt_tablegen::{DEFAULT_TABLE_LEN, parse_len, write_table};

fn main() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-env-changed=SQRT_TABLE_LEN");

  let len = match std::env::var("SQRT_TABLE_LEN") {
    Ok(raw) => parse_len(&raw).unwrap_or_else(|e| panic!("SQRT_TABLE_LEN: {}", e)),
    Err(_) => DEFAULT_TABLE_LEN,
  };

  let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
  let path = out_dir.join("sqrt_table.rs");

  if let Err(e) = write_table(len, &path) {
    panic!("{}", e);
  }
}
