//! Character-cell rasterizer
//!
//! Maps surface pixels onto a fixed grid of terminal cells. A cell is painted
//! when a shape covers any part of it, so thin shapes (the 2px net) still show
//! up at coarse resolutions.

use super::{Color, DrawSurface};
use crate::sim::Surface;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// Fixed-size grid of cells covering the whole surface
#[derive(Debug, Clone)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    /// Surface pixels per cell
    cell_w: f32,
    cell_h: f32,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(cols: u16, rows: u16, surface: &Surface) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: surface.width / cols as f32,
            cell_h: surface.height / rows as f32,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row.min(self.rows - 1) as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        &mut self.cells[row * self.cols as usize + col]
    }

    /// Column range overlapped by the pixel span `[x0, x1)`, clipped to the grid
    fn col_span(&self, x0: f32, x1: f32) -> std::ops::Range<usize> {
        clip_span(x0 / self.cell_w, x1 / self.cell_w, self.cols)
    }

    fn row_span(&self, y0: f32, y1: f32) -> std::ops::Range<usize> {
        clip_span(y0 / self.cell_h, y1 / self.cell_h, self.rows)
    }
}

fn clip_span(start: f32, end: f32, len: u16) -> std::ops::Range<usize> {
    if start.is_nan() || end.is_nan() || end <= start {
        return 0..0;
    }
    let lo = start.floor().max(0.0);
    let hi = end.ceil().min(len as f32);
    if hi <= lo {
        return 0..0;
    }
    lo as usize..hi as usize
}

impl DrawSurface for CellGrid {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let cols = self.col_span(x, x + w);
        let rows = self.row_span(y, y + h);
        for row in rows {
            for col in cols.clone() {
                *self.cell_mut(col, row) = Cell {
                    ch: ' ',
                    fg: color,
                    bg: color,
                };
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        let cols = self.col_span(x - r, x + r);
        let rows = self.row_span(y - r, y + r);
        let (cw, ch) = (self.cell_w, self.cell_h);
        for row in rows {
            for col in cols.clone() {
                // Nearest point of the cell to the circle center
                let nx = x.clamp(col as f32 * cw, (col + 1) as f32 * cw);
                let ny = y.clamp(row as f32 * ch, (row + 1) as f32 * ch);
                let (dx, dy) = (nx - x, ny - y);
                if dx * dx + dy * dy <= r * r {
                    *self.cell_mut(col, row) = Cell {
                        ch: ' ',
                        fg: color,
                        bg: color,
                    };
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        // Canvas text sits on its baseline; put it in the cell row just above
        let row = ((y / self.cell_h).floor() as i64 - 1).clamp(0, self.rows as i64 - 1) as usize;
        let start = (x / self.cell_w).floor() as i64;
        for (i, c) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            let cell = self.cell_mut(col as usize, row);
            cell.ch = c;
            cell.fg = color;
        }
    }
}
