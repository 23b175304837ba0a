//! Row-major grid layout for print sheets.
//!
//! ```text
//! margin | cell | margin | cell | margin
//! ```
//!
//! Every cell has the size of one label; margins surround and separate them.

use crate::ImageEngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub margin: u32,
}

impl SheetLayout {
    /// Layout for `tiles` labels in `cols` columns; `rows = ceil(tiles / cols)`.
    pub fn for_tiles(
        tiles: usize,
        cols: u32,
        cell_width: u32,
        cell_height: u32,
        margin: u32,
    ) -> Result<Self, ImageEngineError> {
        if cols == 0 {
            return Err(ImageEngineError::InvalidGrid("column count must be at least 1".into()));
        }
        if tiles == 0 {
            return Err(ImageEngineError::InvalidGrid("no tiles to lay out".into()));
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(ImageEngineError::InvalidGrid(format!(
                "empty cell size {cell_width}x{cell_height}"
            )));
        }

        let tiles = u32::try_from(tiles)
            .map_err(|_| ImageEngineError::InvalidGrid(format!("too many tiles: {tiles}")))?;
        let rows = tiles.div_ceil(cols);

        Ok(Self {
            cols,
            rows,
            cell_width,
            cell_height,
            margin,
        })
    }

    /// `cols * cell_width + (cols + 1) * margin`
    pub fn width(&self) -> u32 {
        self.cols * self.cell_width + (self.cols + 1) * self.margin
    }

    /// `rows * cell_height + (rows + 1) * margin`
    pub fn height(&self) -> u32 {
        self.rows * self.cell_height + (self.rows + 1) * self.margin
    }

    pub fn capacity(&self) -> u32 {
        self.cols * self.rows
    }

    /// Top-left pixel of the cell holding tile `index`.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let row = index / self.cols;
        let col = index % self.cols;
        (
            self.margin + col * (self.cell_width + self.margin),
            self.margin + row * (self.cell_height + self.margin),
        )
    }

    /// Sheet file name, `batch_sheet_{cols}x{rows}.png`.
    pub fn file_name(&self) -> String {
        format!("batch_sheet_{}x{}.png", self.cols, self.rows)
    }
}
