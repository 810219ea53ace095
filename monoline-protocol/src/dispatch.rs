//! Run parsed commands against a drawing surface

use monoline_core::{Canvas, InvalidOrientation, Orientation};

use crate::command::Command;

/// Errors from executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError<E> {
    /// `nokLcdDrawScrnLine` mode was neither 0 nor 1; nothing was drawn
    InvalidOrientation(i32),
    /// The canvas rejected the operation
    Canvas(E),
}

impl<E> From<InvalidOrientation> for DispatchError<E> {
    fn from(e: InvalidOrientation) -> Self {
        DispatchError::InvalidOrientation(e.0)
    }
}

/// Execute one command
///
/// Each command maps to exactly one canvas call.
pub fn execute<C: Canvas>(canvas: &mut C, command: &Command) -> Result<(), DispatchError<C::Error>> {
    let result = match *command {
        Command::ScreenLine { x, y, mode } => {
            let orientation = Orientation::try_from(mode)?;
            canvas.draw_axis_line(x, y, orientation)
        }
        Command::Line { x0, y0, x1, y1 } => canvas.draw_line(x0, y0, x1, y1),
        Command::Clear => canvas.clear(),
        Command::SetPixel { x, y } => canvas.set_pixel(x, y),
        Command::ClearPixel { x, y } => canvas.clear_pixel(x, y),
    };
    result.map_err(DispatchError::Canvas)
}
