//! Parsing of the first line of a map document.
//!
//! The header has the form `<rows> <empty> <obstacle> <full>`: a positive
//! decimal row count followed by three distinct one-byte symbols, separated
//! by runs of spaces or tabs. Anything after the fourth field is ignored.

use crate::error::{MapError, Result};

/// Per-document parameters taken from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Number of grid lines that follow the header.
    pub rows: usize,
    /// Cells that may be covered by the square.
    pub empty: u8,
    /// Cells that block the square.
    pub obstacle: u8,
    /// Marker stamped onto the winning square.
    pub full: u8,
}

#[inline]
fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Parses a header line with its trailing newline already removed.
pub fn parse_header(line: &[u8]) -> Result<Params> {
    let mut fields = line
        .split(|&b| is_separator(b))
        .filter(|field| !field.is_empty());

    let rows = fields
        .next()
        .ok_or_else(|| malformed("missing row count"))
        .and_then(parse_rows)?;
    let empty = fields
        .next()
        .ok_or_else(|| malformed("missing empty symbol"))
        .and_then(symbol)?;
    let obstacle = fields
        .next()
        .ok_or_else(|| malformed("missing obstacle symbol"))
        .and_then(symbol)?;
    let full = fields
        .next()
        .ok_or_else(|| malformed("missing full symbol"))
        .and_then(symbol)?;

    if empty == obstacle || empty == full || obstacle == full {
        return Err(malformed("symbols must be pairwise distinct"));
    }

    Ok(Params {
        rows,
        empty,
        obstacle,
        full,
    })
}

/// Parses the row count: ASCII digits only, no sign, strictly positive.
fn parse_rows(field: &[u8]) -> Result<usize> {
    if !field.iter().all(u8::is_ascii_digit) {
        return Err(malformed("row count is not a decimal number"));
    }

    let rows = field.iter().try_fold(0usize, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(usize::from(digit - b'0'))
    });

    match rows {
        Some(0) => Err(malformed("row count must be positive")),
        Some(rows) => Ok(rows),
        None => Err(malformed("row count overflows")),
    }
}

fn symbol(field: &[u8]) -> Result<u8> {
    match field {
        [byte] => Ok(*byte),
        _ => Err(malformed("symbols must be a single character")),
    }
}

fn malformed(reason: &str) -> MapError {
    MapError::MalformedHeader(reason.to_owned())
}
