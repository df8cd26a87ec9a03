//! Error types for map documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The only diagnostic users ever see, whatever went wrong.
pub const MAP_ERROR: &str = "map error";

/// Reasons a single map document can be rejected.
///
/// Every variant is terminal for its document and nothing else; the detail
/// is for logs and tests, not for the user-facing diagnostic.
#[derive(Error, Debug)]
pub enum MapError {
    /// The first line does not match `<rows> <empty> <obstacle> <full>`.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The stream ended before the header's row count was reached.
    #[error("expected {expected} rows, stream ended after {found}")]
    TruncatedInput { expected: usize, found: usize },

    /// A row is empty or its width differs from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    IrregularWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell is neither the empty nor the obstacle symbol.
    #[error("invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    /// The document source could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stream failed while being read.
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// Result type for map document processing.
pub type Result<T> = std::result::Result<T, MapError>;
