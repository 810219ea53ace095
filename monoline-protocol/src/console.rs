//! Serial console: bytes in, drawing calls out
//!
//! [`Console`] chains the [`LineAssembler`], [`parse_line`] and
//! [`execute`]. Feed it every received byte; when a line completes it
//! returns an [`Outcome`] that the caller can log or echo back.

use core::fmt;

use monoline_core::Canvas;

use crate::assembler::{LineAssembler, LineError, MAX_LINE_LEN};
use crate::command::{parse_line, Command, ParseError};
use crate::dispatch::{execute, DispatchError};

/// Why a console line had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError<E> {
    /// Line could not be assembled
    Line(LineError),
    /// Line is not a valid command
    Parse(ParseError),
    /// Command was valid but execution failed
    Dispatch {
        command: Command,
        error: DispatchError<E>,
    },
}

impl<E> From<LineError> for ConsoleError<E> {
    fn from(e: LineError) -> Self {
        ConsoleError::Line(e)
    }
}

impl<E> From<ParseError> for ConsoleError<E> {
    fn from(e: ParseError) -> Self {
        ConsoleError::Parse(e)
    }
}

impl<E> ConsoleError<E> {
    /// Numeric status for the console reply
    ///
    /// Rejected lines report `-1`; failed commands report their own
    /// [`failure_code()`](Command::failure_code).
    pub fn status_code(&self) -> i32 {
        match self {
            ConsoleError::Line(_) | ConsoleError::Parse(_) => -1,
            ConsoleError::Dispatch { command, .. } => command.failure_code(),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for ConsoleError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Line(LineError::TooLong) => f.write_str("line too long"),
            ConsoleError::Line(LineError::InvalidUtf8) => f.write_str("invalid characters"),
            ConsoleError::Parse(ParseError::Empty) => f.write_str("empty command"),
            ConsoleError::Parse(ParseError::UnknownCommand) => f.write_str("unknown command"),
            ConsoleError::Parse(ParseError::WrongArgumentCount { expected, found }) => {
                write!(f, "expected {} arguments, got {}", expected, found)
            }
            ConsoleError::Parse(ParseError::InvalidArgument { position }) => {
                write!(f, "argument {} is not an integer", position + 1)
            }
            ConsoleError::Dispatch { command, error } => match error {
                DispatchError::InvalidOrientation(mode) => {
                    write!(f, "{}: mode {} is not 0 or 1", command.name(), mode)
                }
                DispatchError::Canvas(e) => write!(f, "{}: {:?}", command.name(), e),
            },
        }
    }
}

/// Result of one complete console line
pub type Outcome<E> = Result<Command, ConsoleError<E>>;

/// Console state: the partially received line
#[derive(Debug, Clone, Default)]
pub struct Console<const N: usize = MAX_LINE_LEN> {
    assembler: LineAssembler<N>,
}

impl<const N: usize> Console<N> {
    /// Create a console with an empty line buffer
    pub const fn new() -> Self {
        Self {
            assembler: LineAssembler::new(),
        }
    }

    /// Feed one received byte
    ///
    /// Returns `None` until a line completes. The line is then parsed and,
    /// if valid, executed on `canvas`.
    pub fn feed<C: Canvas>(&mut self, byte: u8, canvas: &mut C) -> Option<Outcome<C::Error>> {
        match self.assembler.feed(byte) {
            Ok(None) => None,
            Ok(Some(line)) => Some(Self::run(&line, canvas)),
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Parse and execute one complete line
    pub fn run<C: Canvas>(line: &str, canvas: &mut C) -> Outcome<C::Error> {
        let command = parse_line(line)?;
        execute(canvas, &command).map_err(|error| ConsoleError::Dispatch { command, error })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("console: {}", command);

        Ok(command)
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.assembler.reset();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::convert::Infallible;
    use monoline_core::{ByteKind, DisplayTransport, Renderer};
    use std::string::{String, ToString};
    use std::vec::Vec;

    struct Sink;

    impl DisplayTransport for Sink {
        type Error = Infallible;

        fn write_byte(&mut self, _value: u8, _kind: ByteKind) -> Result<(), Infallible> {
            Ok(())
        }
    }

    fn run_script(script: &[u8]) -> (Renderer<Sink>, Vec<Outcome<monoline_core::RenderError<Infallible>>>) {
        let mut console: Console = Console::new();
        let mut r = Renderer::new(Sink);
        let mut outcomes = Vec::new();
        for &b in script {
            if let Some(outcome) = console.feed(b, &mut r) {
                outcomes.push(outcome);
            }
        }
        (r, outcomes)
    }

    #[test]
    fn test_script_draws() {
        let (r, outcomes) =
            run_script(b"nokLcdClear\r\nnokLcdDrawLine 0,0,3,3\r\nnokLcdDrawScrnLine 0 47 0\r\n");
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.is_ok()));
        assert_eq!(r.framebuffer().count_set(), 4 + 84);
    }

    #[test]
    fn test_rejected_lines_do_not_draw() {
        let (r, outcomes) = run_script(
            b"bogus\nnokLcdDrawLine 1 2 3\nnokLcdDrawScrnLine 0 0 7\nnokLcdSetPixel 84 0\n",
        );
        assert_eq!(outcomes.len(), 4);
        assert!(r.framebuffer().is_blank());

        let codes: Vec<i32> = outcomes
            .iter()
            .map(|o| o.as_ref().err().map_or(0, |e| e.status_code()))
            .collect();
        assert_eq!(codes, [-1, -1, -1, 1]);
    }

    #[test]
    fn test_status_messages() {
        let (_, outcomes) = run_script(b"nokLcdClear 5\nnokLcdDrawScrnLine 0 0 3\n");
        let messages: Vec<String> = outcomes
            .iter()
            .map(|o| o.as_ref().err().map(|e| e.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(messages[0], "expected 0 arguments, got 1");
        assert_eq!(messages[1], "nokLcdDrawScrnLine: mode 3 is not 0 or 1");
    }

    #[test]
    fn test_overlong_line_reported_once() {
        let mut console: Console<8> = Console::new();
        let mut r = Renderer::new(Sink);
        let mut outcomes = Vec::new();
        for &b in b"nokLcdDrawLine 0 0 1 1\n" {
            if let Some(outcome) = console.feed(b, &mut r) {
                outcomes.push(outcome);
            }
        }
        assert_eq!(outcomes, [Err(ConsoleError::Line(LineError::TooLong))]);
        assert!(r.framebuffer().is_blank());
    }
}
