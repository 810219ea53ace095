//! Drawing surface trait

use crate::framebuffer::Framebuffer;
use crate::render::{Orientation, RenderError, Renderer};
use crate::traits::DisplayTransport;

/// Anything that accepts the Monoline drawing primitives
///
/// Implemented by the bare [`Renderer`] and by display drivers that wrap
/// one, so command front-ends work with either.
pub trait Canvas {
    /// Error returned by drawing operations
    type Error;

    /// Turn on one pixel
    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Turn off one pixel
    fn clear_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Ray from `(x, y)` to the right or bottom edge
    fn draw_axis_line(&mut self, x: i32, y: i32, orientation: Orientation)
        -> Result<(), Self::Error>;

    /// Segment between two on-panel points
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::Error>;

    /// Blank the whole panel
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Current pixel mirror
    fn framebuffer(&self) -> &Framebuffer;
}

impl<T: DisplayTransport> Canvas for Renderer<T> {
    type Error = RenderError<T::Error>;

    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error> {
        Renderer::set_pixel(self, x, y)
    }

    fn clear_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error> {
        Renderer::clear_pixel(self, x, y)
    }

    fn draw_axis_line(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), Self::Error> {
        Renderer::draw_axis_line(self, x, y, orientation)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::Error> {
        Renderer::draw_line(self, x0, y0, x1, y1)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Renderer::clear(self)
    }

    fn framebuffer(&self) -> &Framebuffer {
        Renderer::framebuffer(self)
    }
}
