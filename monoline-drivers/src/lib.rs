//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! monoline-core for the Nokia 5110 LCD module:
//!
//! - [`transport::SpiTransport`] - byte transport with D/C and chip-select
//!   framing over a transmit-only SPI bus
//! - [`pcd8544::Pcd8544`] - controller driver (power/reset sequencing,
//!   configuration, drawing)
//! - [`model::ControllerModel`] - simulated controller RAM for host-side
//!   testing and previews

#![no_std]
#![deny(unsafe_code)]

pub mod model;
pub mod pcd8544;
pub mod transport;

pub use model::ControllerModel;
pub use pcd8544::{LcdError, Pcd8544};
pub use transport::SpiTransport;
