//! Monoline Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the LCD stack is
//! written against, so the same driver code runs on any chip that can
//! drive a few GPIOs and a transmit-only SPI peripheral.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  monoline-drivers (SPI transport, LCD)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monoline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 implementations       │
//! │  (embassy-rp, mocks, ...)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (D/C, chip-select, reset, power)
//! - [`spi::SpiBus`] - Blocking transmit-only SPI
//!
//! [`embedded`] wraps any `embedded-hal` 1.0 pin or bus so it satisfies
//! these traits.

#![no_std]
#![deny(unsafe_code)]

pub mod embedded;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use embedded::{EhOutputPin, EhSpiBus};
pub use gpio::{NoPin, OutputPin};
pub use spi::{Mode, Phase, Polarity, SpiBus, SpiConfig};
