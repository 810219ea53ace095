//! Byte-at-a-time line assembly for the serial console
//!
//! UART receive hands over one byte at a time. [`LineAssembler`] buffers
//! them until `\r` or `\n` and then yields the line. A `\r\n` pair
//! produces one line; empty lines are skipped.
//!
//! A line longer than the buffer is dropped as a whole: the assembler
//! discards bytes until the next terminator and then reports
//! [`LineError::TooLong`], so a truncated command never reaches the
//! parser.

use heapless::{String, Vec};

/// Longest accepted console line, terminator excluded
pub const MAX_LINE_LEN: usize = 80;

/// Backspace and DEL, as sent by common terminal emulators
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Errors from line assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// The line did not fit the buffer and was discarded
    TooLong,
    /// The line is not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Collecting bytes
    Collecting,
    /// Buffer overflowed, skipping to the end of the line
    Discarding,
}

/// Line buffer fed one byte at a time
#[derive(Debug, Clone)]
pub struct LineAssembler<const N: usize = MAX_LINE_LEN> {
    state: AssembleState,
    buffer: Vec<u8, N>,
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineAssembler<N> {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
    }

    /// Bytes collected so far for the current line
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed, or `Err` when the line
    /// just terminated had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, LineError> {
        match (self.state, byte) {
            (AssembleState::Discarding, b'\r' | b'\n') => {
                self.reset();
                Err(LineError::TooLong)
            }
            (AssembleState::Discarding, _) => Ok(None),
            (AssembleState::Collecting, b'\r' | b'\n') => {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let bytes = core::mem::take(&mut self.buffer);
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| LineError::InvalidUtf8)
            }
            (AssembleState::Collecting, BACKSPACE | DELETE) => {
                self.buffer.pop();
                Ok(None)
            }
            (AssembleState::Collecting, _) => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssembleState::Discarding;
                }
                Ok(None)
            }
        }
    }

    /// Feed several bytes
    ///
    /// Stops at the first complete line and returns it with the number of
    /// bytes consumed. Bytes after the line are left untouched; feed
    /// `&bytes[used..]` again to continue.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> (usize, Result<Option<String<N>>, LineError>) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.feed(byte) {
                Ok(None) => {}
                done => return (i + 1, done),
            }
        }
        (bytes.len(), Ok(None))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_line_on_cr_or_lf() {
        let mut a: LineAssembler = LineAssembler::new();
        let input = b"nokLcdClear\rnext";
        let (used, line) = a.feed_bytes(input);
        assert_eq!(used, 12);
        assert_eq!(line.unwrap().as_deref(), Some("nokLcdClear"));
        assert!(a.pending().is_empty());

        let (rest, line) = a.feed_bytes(&input[used..]);
        assert_eq!(rest, 4);
        assert_eq!(line, Ok(None));
        assert_eq!(a.pending(), b"next");
        let (_, line) = a.feed_bytes(b"\n");
        assert_eq!(line.unwrap().as_deref(), Some("next"));
        assert!(a.pending().is_empty());
    }

    #[test]
    fn test_crlf_yields_one_line() {
        let mut a: LineAssembler = LineAssembler::new();
        let mut lines = 0;
        for &b in b"nokLcdClear\r\nnokLcdClear\r\n" {
            if let Ok(Some(_)) = a.feed(b) {
                lines += 1;
            }
        }
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_backspace_edits_line() {
        let mut a: LineAssembler = LineAssembler::new();
        let (_, line) = a.feed_bytes(b"nokLcdClearx\x08\n");
        assert_eq!(line.unwrap().as_deref(), Some("nokLcdClear"));

        // Backspace on an empty line is harmless
        let (_, line) = a.feed_bytes(b"\x7f\x7fnokLcdClear\n");
        assert_eq!(line.unwrap().as_deref(), Some("nokLcdClear"));
    }

    #[test]
    fn test_overlong_line_dropped_whole() {
        let mut a: LineAssembler<8> = LineAssembler::new();
        let (_, result) = a.feed_bytes(b"0123456789abc\n");
        assert_eq!(result, Err(LineError::TooLong));

        // Recovers on the next line
        let (_, line) = a.feed_bytes(b"short\n");
        assert_eq!(line.unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_exactly_full_line_accepted() {
        let mut a: LineAssembler<4> = LineAssembler::new();
        let (_, line) = a.feed_bytes(b"abcd\n");
        assert_eq!(line.unwrap().as_deref(), Some("abcd"));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut a: LineAssembler = LineAssembler::new();
        let (_, result) = a.feed_bytes(&[0xC3, 0x28, b'\n']);
        assert_eq!(result, Err(LineError::InvalidUtf8));
        assert!(a.pending().is_empty());
    }

    proptest! {
        #[test]
        fn prop_lines_never_exceed_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
            let mut a: LineAssembler<16> = LineAssembler::new();
            for b in bytes {
                if let Ok(Some(line)) = a.feed(b) {
                    prop_assert!(!line.is_empty());
                    prop_assert!(line.len() <= 16);
                    prop_assert!(!line.contains(&['\r', '\n'][..]));
                }
            }
        }
    }
}
