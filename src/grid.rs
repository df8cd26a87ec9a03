//! Grid representation, reading and validation.
//!
//! The grid is a flat row-major buffer of `rows * cols` cells, one byte per
//! cell. Rows are handed out as slices into that buffer, so a whole document's
//! map is released in one go when the `Grid` is dropped.

use std::io::{BufRead, Write};

use crate::error::{MapError, Result};
use crate::header::Params;
use crate::solver::Square;

/// A rectangular map of single-byte cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

/// Reads one line into `buffer`, dropping its trailing newline.
///
/// Returns `false` at end of stream.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> Result<bool> {
    buffer.clear();
    if reader.read_until(b'\n', buffer)? == 0 {
        return Ok(false);
    }
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    Ok(true)
}

impl Grid {
    /// Reads exactly `rows` lines from `reader`.
    ///
    /// The first line fixes the width; every later line must match it and no
    /// line may be empty. Storage grows with the lines actually read, so a
    /// huge row count on a short stream costs nothing up front.
    pub fn read<R: BufRead>(reader: &mut R, rows: usize) -> Result<Self> {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut line = Vec::new();

        for row in 0..rows {
            if !read_line(reader, &mut line)? {
                return Err(MapError::TruncatedInput {
                    expected: rows,
                    found: row,
                });
            }

            if row == 0 {
                cols = line.len();
            }
            if line.is_empty() || line.len() != cols {
                return Err(MapError::IrregularWidth {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }

            cells.extend_from_slice(&line);
        }

        Ok(Self { cells, rows, cols })
    }

    /// Builds a grid from in-memory rows, with the same width rules as [`Grid::read`].
    pub fn from_rows<S: AsRef<[u8]>>(lines: &[S]) -> Result<Self> {
        let mut joined = Vec::new();
        for line in lines {
            joined.extend_from_slice(line.as_ref());
            joined.push(b'\n');
        }
        Self::read(&mut joined.as_slice(), lines.len())
    }

    /// Checks that every cell is either the empty or the obstacle symbol.
    pub fn validate(&self, params: &Params) -> Result<()> {
        let offending = self
            .cells
            .iter()
            .position(|&cell| cell != params.empty && cell != params.obstacle);

        match offending {
            Some(index) => Err(MapError::InvalidSymbol {
                row: index / self.cols,
                col: index % self.cols,
                symbol: char::from(self.cells[index]),
            }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns row `y` as a slice of cells.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    /// Iterates rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        // cols is never zero for a grid built by `read`
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// Overwrites every cell covered by `square` with `symbol`.
    pub fn fill_square(&mut self, square: Square, symbol: u8) {
        for y in square.y..square.y + square.size {
            let start = y * self.cols + square.x;
            self.cells[start..start + square.size].fill(symbol);
        }
    }

    /// Writes every row followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.iter_rows() {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Renders the grid as text, one line per row.
    ///
    /// Non-UTF-8 cells are replaced, so this is meant for display and tests.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.iter_rows() {
            output.push_str(&String::from_utf8_lossy(row));
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            rows: 0,
            empty: b'.',
            obstacle: b'o',
            full: b'x',
        }
    }

    #[test]
    fn test_reads_exact_row_count_and_leaves_rest() {
        let mut input: &[u8] = b"..o\no..\nrest\n";
        let grid = Grid::read(&mut input, 2).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.row(0), b"..o");
        assert_eq!(grid.row(1), b"o..");
        assert_eq!(input, b"rest\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input: &[u8] = b"..\n.o";
        let grid = Grid::read(&mut input, 2).unwrap();
        assert_eq!(grid.row(1), b".o");
    }

    #[test]
    fn test_truncated_input() {
        let mut input: &[u8] = b"...\n...\n";
        let result = Grid::read(&mut input, 3);
        assert!(matches!(
            result,
            Err(MapError::TruncatedInput {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_huge_row_count_on_short_stream() {
        let mut input: &[u8] = b"..\n";
        let result = Grid::read(&mut input, usize::MAX);
        assert!(matches!(result, Err(MapError::TruncatedInput { found: 1, .. })));
    }

    #[test]
    fn test_irregular_width() {
        let mut input: &[u8] = b"...\n..\n...\n";
        let result = Grid::read(&mut input, 3);
        assert!(matches!(
            result,
            Err(MapError::IrregularWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        ));

        let mut input: &[u8] = b"...\n....\n";
        assert!(matches!(
            Grid::read(&mut input, 2),
            Err(MapError::IrregularWidth { row: 1, found: 4, .. })
        ));
    }

    #[test]
    fn test_empty_rows_are_rejected() {
        let mut input: &[u8] = b"\n\n";
        assert!(matches!(
            Grid::read(&mut input, 2),
            Err(MapError::IrregularWidth { row: 0, found: 0, .. })
        ));

        let mut input: &[u8] = b"..\n\n";
        assert!(matches!(
            Grid::read(&mut input, 2),
            Err(MapError::IrregularWidth { row: 1, found: 0, .. })
        ));
    }

    #[test]
    fn test_carriage_return_counts_as_a_cell() {
        let mut input: &[u8] = b"..\r\n..\n";
        assert!(matches!(
            Grid::read(&mut input, 2),
            Err(MapError::IrregularWidth { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_validate_accepts_empty_and_obstacle() {
        let grid = Grid::from_rows(&["..o", "o.."]).unwrap();
        assert!(grid.validate(&params()).is_ok());
    }

    #[test]
    fn test_validate_reports_first_offending_cell() {
        let grid = Grid::from_rows(&["..o", "o#x"]).unwrap();
        let result = grid.validate(&params());
        assert!(matches!(
            result,
            Err(MapError::InvalidSymbol {
                row: 1,
                col: 1,
                symbol: '#'
            })
        ));
    }

    #[test]
    fn test_validate_rejects_full_symbol_in_input() {
        let grid = Grid::from_rows(&["x."]).unwrap();
        assert!(matches!(
            grid.validate(&params()),
            Err(MapError::InvalidSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn test_fill_square_and_write() {
        let mut grid = Grid::from_rows(&["....", "....", "...."]).unwrap();
        grid.fill_square(Square { y: 1, x: 2, size: 2 }, b'x');

        let mut out = Vec::new();
        grid.write_to(&mut out).unwrap();
        assert_eq!(out, b"....\n..xx\n..xx\n");
        assert_eq!(grid.render(), "....\n..xx\n..xx\n");
    }

    #[test]
    fn test_fill_empty_square_is_a_no_op() {
        let mut grid = Grid::from_rows(&["oo", "oo"]).unwrap();
        let before = grid.clone();
        grid.fill_square(Square::default(), b'x');
        assert_eq!(grid, before);
    }
}
