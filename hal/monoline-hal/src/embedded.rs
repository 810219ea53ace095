//! Adapters from `embedded-hal` 1.0 to the Monoline traits
//!
//! Chip HALs (embassy-rp, rp2040-hal, esp-hal, ...) implement the
//! `embedded-hal` traits; wrapping their pins and buses here lets the
//! drivers stay chip-agnostic.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutput;
use embedded_hal::spi::SpiBus as EhSpi;

use crate::gpio::OutputPin;
use crate::spi::SpiBus;

/// Wraps an infallible `embedded-hal` output pin
///
/// The last driven level is cached so [`OutputPin::is_set_high`] does not
/// need `StatefulOutputPin`.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutputPin<P>
where
    P: EhOutput<Error = Infallible>,
{
    /// Wrap a pin, driving it to `initial_high` so the cache is accurate
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut wrapped = Self { pin, high: false };
        wrapped.set_state(initial_high);
        wrapped
    }

    /// Return the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutputPin<P>
where
    P: EhOutput<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Wraps an `embedded-hal` SPI bus
pub struct EhSpiBus<S> {
    bus: S,
}

impl<S> EhSpiBus<S>
where
    S: EhSpi<u8>,
{
    /// Wrap a bus
    pub fn new(bus: S) -> Self {
        Self { bus }
    }

    /// Return the underlying bus
    pub fn release(self) -> S {
        self.bus
    }
}

impl<S> SpiBus for EhSpiBus<S>
where
    S: EhSpi<u8>,
{
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush()
    }
}
