//! Occupancy grid for a single page.
//!
//! The printable area is discretized at 1mm: a print of 30.0 x 40.0 mm
//! covers 30 x 40 cells, fractional sizes round up to the next whole cell,
//! and the printable area rounds down. Occupancy is a flat row-major
//! `Vec<bool>`.

use photopack_core::{Error, LayoutConfig, Page, PlacedItem, PlacementRequest, RectSize, Result};

/// Largest occupancy mask one page may allocate, in cells. 25 million
/// cells covers a 5 x 5 m printable area.
pub const MAX_GRID_CELLS: usize = 25_000_000;

/// Tolerance applied before rounding so that values such as
/// `29.999999999` or `30.000000001` land on 30 cells.
const CELL_EPSILON: f64 = 1e-6;

/// Number of whole cells needed to cover `mm` (rounded up).
pub(crate) fn cells_to_cover(mm: f64) -> usize {
    (mm - CELL_EPSILON).ceil().max(0.0) as usize
}

/// Number of whole cells available inside `mm` (rounded down).
pub(crate) fn cells_within(mm: f64) -> usize {
    (mm + CELL_EPSILON).floor().max(0.0) as usize
}

/// Grid extent `(columns, rows)` of a printable area.
pub(crate) fn grid_extent(printable: RectSize) -> (usize, usize) {
    (cells_within(printable.width), cells_within(printable.height))
}

/// Grid extent of a printable area, rejecting areas whose mask would exceed
/// [`MAX_GRID_CELLS`].
pub(crate) fn checked_grid_extent(printable: RectSize) -> Result<(usize, usize)> {
    let (cols, rows) = grid_extent(printable);
    match cols.checked_mul(rows) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok((cols, rows)),
        _ => Err(Error::InvalidSize(format!(
            "printable area {} needs more than {} grid cells",
            printable, MAX_GRID_CELLS
        ))),
    }
}

/// Returns true if a print of `size` fits an empty grid of `(cols, rows)`.
pub(crate) fn fits_extent((cols, rows): (usize, usize), size: RectSize) -> bool {
    let (w, h) = footprint(size);
    w <= cols && h <= rows
}

/// Footprint `(columns, rows)` of a print, at least one cell each way.
pub(crate) fn footprint(size: RectSize) -> (usize, usize) {
    (
        cells_to_cover(size.width).max(1),
        cells_to_cover(size.height).max(1),
    )
}

/// One page being filled: occupancy mask plus the prints placed so far.
#[derive(Debug, Clone)]
pub struct PageGrid {
    page: Page,
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    margin: f64,
    spacing: usize,
    /// Footprints already known not to fit. Occupancy only grows, so any
    /// footprint at least this large in both directions fails too.
    rejected: Vec<(usize, usize)>,
}

impl PageGrid {
    /// Creates an empty page for `paper`. The grid covers the paper minus
    /// the configured margin on every side.
    ///
    /// Fails with [`Error::InvalidSize`] if the mask would exceed
    /// [`MAX_GRID_CELLS`].
    pub fn new(page_number: usize, paper: RectSize, config: &LayoutConfig) -> Result<Self> {
        let (cols, rows) = match paper.inset(config.page_margin) {
            Some(printable) => checked_grid_extent(printable)?,
            None => (0, 0),
        };

        Ok(Self {
            page: Page::new(page_number, paper),
            cols,
            rows,
            cells: vec![false; cols * rows],
            margin: config.page_margin,
            spacing: cells_to_cover(config.item_spacing),
            rejected: Vec::new(),
        })
    }

    pub fn page_number(&self) -> usize {
        self.page.page_number
    }

    /// Grid width in cells (mm).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells (mm).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.page.items
    }

    pub fn is_empty(&self) -> bool {
        self.page.items.is_empty()
    }

    /// Returns true if the cell at column `x`, row `y` is taken. Cells
    /// outside the grid count as taken.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x >= self.cols || y >= self.rows || self.cells[y * self.cols + x]
    }

    /// Number of cells not yet taken by a print or its spacing.
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|&&taken| !taken).count()
    }

    /// Returns true if a print of `size` fits an empty grid of this extent.
    pub fn fits_empty(&self, size: RectSize) -> bool {
        fits_extent((self.cols, self.rows), size)
    }

    /// Places `request` at the first free position in row-major order.
    ///
    /// On success the print plus `item_spacing` to its right and below
    /// (clipped to the grid) is marked occupied. On failure the grid is
    /// left untouched.
    pub fn try_place(&mut self, request: &PlacementRequest) -> Option<&PlacedItem> {
        let (w, h) = footprint(request.size);
        let (x, y) = self.find_position(w, h)?;

        self.mark(x, y, w + self.spacing, h + self.spacing);

        let item = PlacedItem {
            id: request.item_id(),
            source_id: request.source_id.clone(),
            image: request.image.clone(),
            x: x as f64 + self.margin,
            y: y as f64 + self.margin,
            width: request.size.width,
            height: request.size.height,
            background: request.background,
        };
        log::trace!(
            "page {}: placed {} at ({}, {})",
            self.page.page_number,
            item.id,
            item.x,
            item.y
        );
        self.page.items.push(item);
        self.page.items.last()
    }

    /// Consumes the grid, returning the finished page.
    pub fn into_page(self) -> Page {
        self.page
    }

    /// First-fit scan: rows top to bottom, columns left to right.
    fn find_position(&mut self, w: usize, h: usize) -> Option<(usize, usize)> {
        if w > self.cols || h > self.rows {
            return None;
        }
        if self.rejected.iter().any(|&(rw, rh)| rw <= w && rh <= h) {
            return None;
        }

        for y in 0..=self.rows - h {
            let mut x = 0;
            while x + w <= self.cols {
                match self.blocking_column(x, y, w, h) {
                    None => return Some((x, y)),
                    // Every start column up to the blocker overlaps it.
                    Some(col) => x = col + 1,
                }
            }
        }

        self.rejected.retain(|&(rw, rh)| !(w <= rw && h <= rh));
        self.rejected.push((w, h));
        None
    }

    /// Returns an occupied column inside `[x, x+w) x [y, y+h)`, or `None` if
    /// the whole region is free. Rows are checked right to left so the
    /// returned column is the rightmost blocker of the first blocked row.
    fn blocking_column(&self, x: usize, y: usize, w: usize, h: usize) -> Option<usize> {
        for row in y..y + h {
            let start = row * self.cols;
            let line = &self.cells[start + x..start + x + w];
            if let Some(offset) = line.iter().rposition(|&taken| taken) {
                return Some(x + offset);
            }
        }
        None
    }

    /// Marks `[x, x+w) x [y, y+h)` occupied, clipped to the grid.
    fn mark(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = (x + w).min(self.cols);
        let y_end = (y + h).min(self.rows);
        for row in y..y_end {
            let start = row * self.cols;
            self.cells[start + x..start + x_end].fill(true);
        }
    }
}
