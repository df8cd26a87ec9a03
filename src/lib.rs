//! Largest Empty Square Library
//!
//! Parses map documents, finds the largest square of empty cells and stamps
//! it with the full symbol.
//!
//! A document is a header line `<rows> <empty> <obstacle> <full>` followed by
//! `rows` lines of equal width drawn from the empty and obstacle symbols.

pub mod error;
pub mod grid;
pub mod header;
pub mod pipeline;
pub mod solver;

pub use error::{MapError, Result, MAP_ERROR};
pub use grid::Grid;
pub use header::{parse_header, Params};
pub use pipeline::{run_files, run_reader, solve_document, RunSummary};
pub use solver::{find_largest_square, solve, Square};
