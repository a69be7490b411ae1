use crate::grid::Grid;
use crate::scalar::Scalar;
use std::fmt::{self, Display, Write};

/// Width every cell is right-justified to.
pub const CELL_WIDTH: usize = 7;

/// Text table of the grid, one `| ... |` line per row, optionally preceded
/// by a title line.
pub fn render<T: Scalar + Display>(grid: &Grid<T>, title: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_grid(&mut out, grid, title);
    out
}

fn write_grid<W: Write, T: Scalar + Display>(
    out: &mut W,
    grid: &Grid<T>,
    title: Option<&str>,
) -> fmt::Result {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        writeln!(out, "{title}")?;
    }
    for r in 0..grid.rows() {
        out.write_str("| ")?;
        for c in 0..grid.cols() {
            write!(out, "{:>width$} ", grid[(r, c)], width = CELL_WIDTH)?;
        }
        out.write_str("|\n")?;
    }
    Ok(())
}

impl<T: Scalar + Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, None)
    }
}
