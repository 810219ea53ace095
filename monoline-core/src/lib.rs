//! Board-agnostic core logic for the Monoline LCD stack
//!
//! This crate contains everything that does not depend on a specific
//! chip or bus:
//!
//! - [`framebuffer`] - bank-addressed mirror of the panel RAM
//! - [`render`] - pixel, ray and Bresenham line drawing with write-through
//! - [`traits`] - the byte transport the renderer talks to
//! - [`config`] - controller configuration and instruction encoding

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod framebuffer;
pub mod render;
pub mod traits;

pub use framebuffer::{Framebuffer, OutOfRange, PixelWrite, BANKS, HEIGHT, WIDTH};
pub use render::{InvalidOrientation, LinePoints, Orientation, RenderError, Renderer};
pub use traits::{ByteKind, Canvas, DisplayTransport};
