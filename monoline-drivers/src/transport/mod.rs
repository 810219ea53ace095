//! Byte transports

mod spi;

pub use spi::SpiTransport;
