//! Document processing: header, grid, validation, solving and output.
//!
//! Each input stream holds exactly one document. A failing document is
//! reported with the single line [`MAP_ERROR`] on the error channel and never
//! stops the run. When several files are processed, a blank line on the output
//! channel separates each document from the next.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{MapError, Result, MAP_ERROR};
use crate::grid::{read_line, Grid};
use crate::header::parse_header;
use crate::solver;

/// Outcome counts for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents attempted, including ones that could not be opened.
    pub processed: usize,
    /// Documents that ended in a diagnostic instead of a grid.
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, ok: bool) {
        self.processed += 1;
        if !ok {
            self.failed += 1;
        }
    }
}

/// Reads one document from `reader` and returns its solved grid.
pub fn solve_document<R: BufRead>(reader: &mut R) -> Result<Grid> {
    let mut line = Vec::new();
    if !read_line(reader, &mut line)? {
        return Err(MapError::MalformedHeader("empty stream".to_owned()));
    }

    let params = parse_header(&line)?;
    let mut grid = Grid::read(reader, params.rows)?;
    grid.validate(&params)?;

    log::debug!(
        "solving {}x{} grid (empty {:?}, obstacle {:?}, full {:?})",
        grid.rows(),
        grid.cols(),
        char::from(params.empty),
        char::from(params.obstacle),
        char::from(params.full)
    );
    solver::solve(&mut grid, &params);

    Ok(grid)
}

/// Prints the outcome of one document.
///
/// A solved grid goes to `out`; any failure becomes one diagnostic line on
/// `err`. Returns whether the document succeeded. Only failures of the
/// output channels themselves are returned as errors.
fn emit<W: Write, E: Write>(outcome: Result<Grid>, out: &mut W, err: &mut E) -> io::Result<bool> {
    match outcome {
        Ok(grid) => {
            grid.write_to(out)?;
            Ok(true)
        }
        Err(error) => {
            log::debug!("{error}");
            // keep both channels in order when they share a terminal
            out.flush()?;
            writeln!(err, "{MAP_ERROR}")?;
            Ok(false)
        }
    }
}

/// Processes a single document from an already open stream, such as stdin.
///
/// No separator is printed.
pub fn run_reader<R: BufRead, W: Write, E: Write>(
    reader: &mut R,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    let ok = emit(solve_document(reader), out, err)?;
    summary.record(ok);
    out.flush()?;
    Ok(summary)
}

/// Opens and processes one file.
///
/// The file handle and the grid are dropped before the caller moves on.
fn solve_file(path: &Path) -> Result<Grid> {
    let file = File::open(path).map_err(|source| MapError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    solve_document(&mut BufReader::new(file))
}

/// Processes each file as its own document, in order.
///
/// A blank line follows every document except the last, whether it
/// succeeded or not.
pub fn run_files<P: AsRef<Path>, W: Write, E: Write>(
    paths: &[P],
    out: &mut W,
    err: &mut E,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        log::debug!("processing {}", path.display());

        let ok = emit(solve_file(path), out, err)?;
        summary.record(ok);

        if index + 1 < paths.len() {
            out.write_all(b"\n")?;
        }
    }

    out.flush()?;
    Ok(summary)
}
