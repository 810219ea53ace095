//! Controller configuration
//!
//! [`LcdConfig`] holds the settings sent during initialisation;
//! [`instruction`] encodes the PCD8544 instruction set.

pub mod instruction;
mod types;

pub use types::{ConfigError, DisplayMode, LcdConfig};
