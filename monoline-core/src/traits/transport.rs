//! Byte transport to the display controller

/// How the controller should interpret a byte
///
/// Selects the level of the D/C line during the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKind {
    /// Instruction byte (D/C low)
    Command,
    /// Display RAM byte (D/C high)
    Data,
}

impl ByteKind {
    /// Level of the D/C line for this kind
    pub const fn dc_high(self) -> bool {
        matches!(self, ByteKind::Data)
    }
}

/// Trait for sending single bytes to the display controller
///
/// Each call transfers exactly one byte and returns only after the
/// transfer has completed, so callers may rely on ordering between
/// consecutive writes. Implementations must never batch or reorder.
pub trait DisplayTransport {
    /// Error raised by the underlying link
    type Error;

    /// Send one byte as a command or as data
    fn write_byte(&mut self, value: u8, kind: ByteKind) -> Result<(), Self::Error>;

    /// Send one instruction byte
    fn command(&mut self, value: u8) -> Result<(), Self::Error> {
        self.write_byte(value, ByteKind::Command)
    }

    /// Send one display RAM byte
    fn data(&mut self, value: u8) -> Result<(), Self::Error> {
        self.write_byte(value, ByteKind::Data)
    }
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, value: u8, kind: ByteKind) -> Result<(), Self::Error> {
        (**self).write_byte(value, kind)
    }
}
