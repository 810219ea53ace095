//! Bank-addressed pixel mirror
//!
//! The PCD8544 stores its 84×48 pixels as 6 banks of 8 rows. One byte per
//! column per bank holds 8 vertically stacked pixels, least significant bit
//! at the top. [`Framebuffer`] keeps the same layout so every cell can be
//! pushed to the controller unchanged.
//!
//! ```text
//!            column 0   column 1        column 83
//! bank 0   ┌─────────┬─────────┬ ··· ┬─────────┐  rows 0-7
//! bank 1   ├─────────┼─────────┼ ··· ┼─────────┤  rows 8-15
//!   ...
//! bank 5   └─────────┴─────────┴ ··· ┴─────────┘  rows 40-47
//! ```
//!
//! The framebuffer performs no I/O. The renderer decides when a changed
//! cell reaches the display.

/// Panel width in pixels
pub const WIDTH: usize = 84;

/// Panel height in pixels
pub const HEIGHT: usize = 48;

/// Pixel rows packed into one RAM byte
pub const ROWS_PER_BANK: usize = 8;

/// Number of banks
pub const BANKS: usize = HEIGHT / ROWS_PER_BANK;

/// A coordinate outside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange {
    pub x: i32,
    pub y: i32,
}

/// Result of a pixel update: where the cell lives and its new contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelWrite {
    /// Column (X RAM address), 0-83
    pub column: u8,
    /// Bank (Y RAM address), 0-5
    pub bank: u8,
    /// Full byte now stored in the cell
    pub value: u8,
}

/// Resolved address of a single pixel
#[derive(Clone, Copy)]
struct Location {
    column: usize,
    bank: usize,
    mask: u8,
}

impl Location {
    fn resolve(x: i32, y: i32) -> Result<Self, OutOfRange> {
        if !Framebuffer::contains(x, y) {
            return Err(OutOfRange { x, y });
        }
        let (x, y) = (x as usize, y as usize);
        Ok(Self {
            column: x,
            bank: y / ROWS_PER_BANK,
            mask: 1 << (y % ROWS_PER_BANK),
        })
    }
}

/// In-memory copy of the controller's display RAM
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Indexed `[column][bank]`
    cells: [[u8; BANKS]; WIDTH],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an all-clear framebuffer
    pub const fn new() -> Self {
        Self {
            cells: [[0; BANKS]; WIDTH],
        }
    }

    /// Check whether a coordinate lies on the panel
    #[inline]
    pub const fn contains(x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Turn a pixel on
    ///
    /// Other pixels sharing the cell are preserved. Returns the cell
    /// address and its new value so the caller can push it to the display.
    pub fn set_pixel(&mut self, x: i32, y: i32) -> Result<PixelWrite, OutOfRange> {
        let loc = Location::resolve(x, y)?;
        let cell = &mut self.cells[loc.column][loc.bank];
        *cell |= loc.mask;
        Ok(Self::write_at(loc, *cell))
    }

    /// Turn a pixel off
    pub fn clear_pixel(&mut self, x: i32, y: i32) -> Result<PixelWrite, OutOfRange> {
        let loc = Location::resolve(x, y)?;
        let cell = &mut self.cells[loc.column][loc.bank];
        *cell &= !loc.mask;
        Ok(Self::write_at(loc, *cell))
    }

    fn write_at(loc: Location, value: u8) -> PixelWrite {
        PixelWrite {
            column: loc.column as u8,
            bank: loc.bank as u8,
            value,
        }
    }

    /// Read a pixel, `None` if off-panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let loc = Location::resolve(x, y).ok()?;
        Some(self.cells[loc.column][loc.bank] & loc.mask != 0)
    }

    /// Read the raw byte at a RAM address
    pub fn cell(&self, column: usize, bank: usize) -> Option<u8> {
        self.cells.get(column)?.get(bank).copied()
    }

    /// Zero one cell
    pub(crate) fn zero_cell(&mut self, column: usize, bank: usize) {
        if let Some(cell) = self.cells.get_mut(column).and_then(|c| c.get_mut(bank)) {
            *cell = 0;
        }
    }

    /// Zero every cell
    pub fn clear_all(&mut self) {
        for column in self.cells.iter_mut() {
            column.fill(0);
        }
    }

    /// True when no pixel is set
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == 0)
    }

    /// Number of pixels that are on
    pub fn count_set(&self) -> u32 {
        self.cells.iter().flatten().map(|cell| cell.count_ones()).sum()
    }

    /// Raw cell grid, indexed `[column][bank]`
    pub fn cells(&self) -> &[[u8; BANKS]; WIDTH] {
        &self.cells
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("pixels_set", &self.count_set())
            .finish()
    }
}
