//! Largest empty square search.
//!
//! Classic dynamic programming: the value at a cell is the side of the
//! largest all-empty square whose bottom-right corner sits on that cell,
//! computed from its top, left and top-left neighbours.
//!
//! Key points:
//! - Two rolling row buffers of `cols + 1` entries instead of a full table,
//!   giving O(rows * cols) time and O(cols) extra space
//! - Column 0 of each buffer is a permanent zero sentinel, so the left edge
//!   needs no special case
//! - Only a strictly larger square replaces the best one, so ties go to the
//!   first square met in row-major order

use crate::grid::Grid;
use crate::header::Params;

/// An axis-aligned square inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    /// Row of the top-left corner.
    pub y: usize,
    /// Column of the top-left corner.
    pub x: usize,
    /// Side length; zero when the grid has no empty cell.
    pub size: usize,
}

/// Finds the largest square made only of `empty` cells.
///
/// Among squares of the same size, the topmost and then leftmost wins.
pub fn find_largest_square(grid: &Grid, empty: u8) -> Square {
    let cols = grid.cols();
    let mut prev = vec![0usize; cols + 1];
    let mut curr = vec![0usize; cols + 1];
    let mut best = Square::default();

    for (y, row) in grid.iter_rows().enumerate() {
        for x in 1..=cols {
            if row[x - 1] != empty {
                curr[x] = 0;
                continue;
            }

            curr[x] = 1 + prev[x].min(curr[x - 1]).min(prev[x - 1]);

            if curr[x] > best.size {
                best = Square {
                    y: y + 1 - curr[x],
                    x: x - curr[x],
                    size: curr[x],
                };
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Finds the largest empty square and stamps it with the full symbol.
///
/// Returns the square that was filled.
pub fn solve(grid: &mut Grid, params: &Params) -> Square {
    let best = find_largest_square(grid, params.empty);
    grid.fill_square(best, params.full);
    log::trace!(
        "largest square: size {} at row {}, column {}",
        best.size,
        best.y,
        best.x
    );
    best
}
