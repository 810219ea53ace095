//! SPI byte transport
//!
//! The PCD8544 latches one byte per SCE low pulse and samples D/C on the
//! last bit. Each byte is therefore sent as:
//!
//! 1. drive D/C (low = command, high = data)
//! 2. pull SCE low
//! 3. shift the byte out and wait for the bus to go idle
//! 4. release SCE
//!
//! SCE is released even when the bus reports an error so the controller
//! never sees a half-framed transfer as the start of the next one.

use monoline_core::{ByteKind, DisplayTransport};
use monoline_hal::{OutputPin, SpiBus};

/// Transport for a PCD8544 on a dedicated SPI bus
pub struct SpiTransport<SPI, DC, CE> {
    spi: SPI,
    dc: DC,
    ce: CE,
}

impl<SPI, DC, CE> SpiTransport<SPI, DC, CE>
where
    SPI: SpiBus,
    DC: OutputPin,
    CE: OutputPin,
{
    /// Create a transport, leaving the chip deselected
    pub fn new(spi: SPI, mut dc: DC, mut ce: CE) -> Self {
        ce.set_high();
        dc.set_low();
        Self { spi, dc, ce }
    }

    /// Return the bus and pins
    pub fn release(self) -> (SPI, DC, CE) {
        (self.spi, self.dc, self.ce)
    }
}

impl<SPI, DC, CE> DisplayTransport for SpiTransport<SPI, DC, CE>
where
    SPI: SpiBus,
    DC: OutputPin,
    CE: OutputPin,
{
    type Error = SPI::Error;

    fn write_byte(&mut self, value: u8, kind: ByteKind) -> Result<(), Self::Error> {
        self.dc.set_state(kind.dc_high());
        self.ce.set_low();
        let result = self.spi.write_blocking(&[value]);
        self.ce.set_high();

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("SPI write of {=u8:#x} ({}) failed", value, kind);
        }

        result
    }
}
