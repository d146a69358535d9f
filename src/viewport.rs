//! Mapping between the logical surface and terminal cells.
//!
//! The simulation always runs on the fixed logical surface; the terminal
//! can be any size.  Drawing scales logical units down to cells, pointer
//! events scale cells back up to logical units.

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub logical_width: f32,
    pub logical_height: f32,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(logical_width: f32, logical_height: f32, cols: u16, rows: u16) -> Self {
        Viewport {
            logical_width,
            logical_height,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Follow a terminal resize.
    pub fn resized(&self, cols: u16, rows: u16) -> Self {
        Viewport::new(self.logical_width, self.logical_height, cols, rows)
    }

    fn col_of(&self, x: f32) -> u16 {
        let col = (x * self.cols as f32 / self.logical_width).floor().max(0.0) as u16;
        col.min(self.cols - 1)
    }

    fn row_of(&self, y: f32) -> u16 {
        let row = (y * self.rows as f32 / self.logical_height).floor().max(0.0) as u16;
        row.min(self.rows - 1)
    }

    /// The cell containing `p`, clamped into the grid.
    pub fn to_cell(&self, p: Point) -> (u16, u16) {
        (self.col_of(p.x), self.row_of(p.y))
    }

    fn centre_x(&self, col: u16) -> f32 {
        (col as f32 + 0.5) * self.logical_width / self.cols as f32
    }

    fn centre_y(&self, row: u16) -> f32 {
        (row as f32 + 0.5) * self.logical_height / self.rows as f32
    }

    /// The logical point at the centre of a cell.
    pub fn to_logical(&self, col: u16, row: u16) -> Point {
        Point::new(self.centre_x(col), self.centre_y(row))
    }

    /// Cells covered by `rect` as `(col, row, cols, rows)`, or `None` when
    /// the rect lies entirely off the surface.
    ///
    /// A cell belongs to the rect iff its centre does, which is exactly the
    /// point a click on that cell reports, so every drawn cell of a button
    /// is clickable.  A shape too thin to own any centre still gets the one
    /// cell containing its corner so it never vanishes.
    pub fn cell_rect(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        if rect.right() <= 0.0
            || rect.bottom() <= 0.0
            || rect.x >= self.logical_width
            || rect.y >= self.logical_height
        {
            return None;
        }
        let (col, cols) = centred_span(self.cols, rect.x, rect.right(), |c| self.centre_x(c))
            .unwrap_or((self.col_of(rect.x), 1));
        let (row, rows) = centred_span(self.rows, rect.y, rect.bottom(), |r| self.centre_y(r))
            .unwrap_or((self.row_of(rect.y), 1));
        Some((col, row, cols, rows))
    }

    /// The longest prefix of `text` that fits on a row starting at `col`
    /// without reaching the last column, so printing it never wraps.
    pub fn clip_text<'t>(&self, col: u16, text: &'t str) -> &'t str {
        let room = self.cols.saturating_sub(col).saturating_sub(1) as usize;
        match text.char_indices().nth(room) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }
}

/// First cell and count of the run of cells whose centre lies in `lo..hi`.
fn centred_span(cells: u16, lo: f32, hi: f32, centre: impl Fn(u16) -> f32) -> Option<(u16, u16)> {
    let first = (0..cells).find(|&i| centre(i) >= lo)?;
    let end = (first..cells).find(|&i| centre(i) >= hi).unwrap_or(cells);
    (end > first).then(|| (first, end - first))
}
