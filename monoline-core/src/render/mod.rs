//! Write-through rendering engine
//!
//! [`Renderer`] owns the [`Framebuffer`] and a [`DisplayTransport`]. Every
//! pixel change is applied to the mirror and immediately pushed to the
//! controller as three bytes:
//!
//! ```text
//! CMD  0x80 | column     set X address
//! CMD  0x40 | bank       set Y address
//! DATA cell              new 8-pixel column
//! ```
//!
//! Lines are built from that triplet. Validation always happens before the
//! first byte is sent, so a rejected request leaves both the mirror and the
//! panel untouched.

mod line;

pub use line::LinePoints;

use crate::config::instruction::{set_x_address, set_y_address};
use crate::framebuffer::{Framebuffer, OutOfRange, PixelWrite, BANKS, HEIGHT, WIDTH};
use crate::traits::DisplayTransport;

/// Direction of an edge-to-edge ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Towards the right edge
    Horizontal,
    /// Towards the bottom edge
    Vertical,
}

/// Unknown orientation code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidOrientation(pub i32);

impl TryFrom<i32> for Orientation {
    type Error = InvalidOrientation;

    /// `0` is horizontal, `1` is vertical
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(InvalidOrientation(other)),
        }
    }
}

/// Errors from drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// A requested coordinate is off-panel; nothing was drawn
    OutOfRange(OutOfRange),
    /// Axis ray mode was neither horizontal nor vertical
    InvalidOrientation(i32),
    /// The rasterizer produced an off-panel point from in-range endpoints
    Rasterization(OutOfRange),
    /// The transport failed; the panel may lag the mirror
    Transport(E),
}

impl<E> From<OutOfRange> for RenderError<E> {
    fn from(e: OutOfRange) -> Self {
        RenderError::OutOfRange(e)
    }
}

impl<E> From<InvalidOrientation> for RenderError<E> {
    fn from(e: InvalidOrientation) -> Self {
        RenderError::InvalidOrientation(e.0)
    }
}

/// Pixel and line renderer for one display
pub struct Renderer<T> {
    transport: T,
    framebuffer: Framebuffer,
}

impl<T: DisplayTransport> Renderer<T> {
    /// Create a renderer with a blank mirror
    ///
    /// No bytes are sent. The panel RAM is undefined after power-up, so
    /// [`clear()`](Self::clear) must run before drawing.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            framebuffer: Framebuffer::new(),
        }
    }

    /// Turn on one pixel
    pub fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError<T::Error>> {
        let write = self.framebuffer.set_pixel(x, y)?;
        self.push(write)
    }

    /// Turn off one pixel
    pub fn clear_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError<T::Error>> {
        let write = self.framebuffer.clear_pixel(x, y)?;
        self.push(write)
    }

    /// Draw from `(x, y)` to the right or bottom edge, start pixel included
    pub fn draw_axis_line(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), RenderError<T::Error>> {
        check(x, y)?;

        match orientation {
            Orientation::Horizontal => {
                for column in x..WIDTH as i32 {
                    self.plot(column, y)?;
                }
            }
            Orientation::Vertical => {
                for row in y..HEIGHT as i32 {
                    self.plot(x, row)?;
                }
            }
        }
        Ok(())
    }

    /// Draw the Bresenham segment between two on-panel points
    ///
    /// Segments are not clipped: both endpoints must be on the panel.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Result<(), RenderError<T::Error>> {
        check(x0, y0)?;
        check(x1, y1)?;

        for (x, y) in LinePoints::new(x0, y0, x1, y1) {
            self.plot(x, y)?;
        }
        Ok(())
    }

    /// Blank the panel and the mirror
    ///
    /// Each bank is addressed once at column 0 and then streamed with
    /// zeros; the controller advances X after every data byte.
    pub fn clear(&mut self) -> Result<(), RenderError<T::Error>> {
        for bank in 0..BANKS {
            self.command(set_x_address(0))?;
            self.command(set_y_address(bank as u8))?;

            for column in 0..WIDTH {
                self.transport.data(0).map_err(RenderError::Transport)?;
                self.framebuffer.zero_cell(column, bank);
            }
        }
        Ok(())
    }

    /// Read-only view of the mirror
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Send a raw instruction byte
    ///
    /// Used by drivers for configuration. Addressing commands sent here
    /// are harmless because every pixel write re-addresses its cell.
    pub fn command(&mut self, value: u8) -> Result<(), RenderError<T::Error>> {
        self.transport.command(value).map_err(RenderError::Transport)
    }

    /// Shared access to the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exclusive access to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the renderer, returning the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Set a pixel produced by the rasterizer
    fn plot(&mut self, x: i32, y: i32) -> Result<(), RenderError<T::Error>> {
        match self.set_pixel(x, y) {
            Err(RenderError::OutOfRange(e)) => Err(RenderError::Rasterization(e)),
            other => other,
        }
    }

    fn push(&mut self, write: PixelWrite) -> Result<(), RenderError<T::Error>> {
        self.command(set_x_address(write.column))?;
        self.command(set_y_address(write.bank))?;
        self.transport
            .data(write.value)
            .map_err(RenderError::Transport)
    }
}

fn check(x: i32, y: i32) -> Result<(), OutOfRange> {
    if Framebuffer::contains(x, y) {
        Ok(())
    } else {
        Err(OutOfRange { x, y })
    }
}
