//! sqrt-core: square root backends
//!
//! This crate provides two implementations of one capability, [`SquareRoot`]:
//! - [`TableSqrt`]: seeds from a table generated at build time and refines once
//! - [`PreciseSqrt`]: the platform `f64::sqrt`
//!
//! [`Backend`] selects between them. The `table` feature (on by default) makes the
//! table-seeded approximation the default.

mod backend;
mod error;
mod table;

pub use backend::{Backend, PreciseSqrt, SquareRoot, TableSqrt, approximate_sqrt, precise_sqrt, sqrt};
pub use error::BackendParseError;
pub use table::{max_relative_error, table_len};
