//! Panel settings compiled in from display.toml
//!
//! build.rs validates display.toml and writes the constants included
//! below. Edit the TOML file and rebuild to change them.

use monoline_core::config::{DisplayMode, LcdConfig};
use monoline_hal::SpiConfig;

include!(concat!(env!("OUT_DIR"), "/display_config.rs"));

/// SPI settings for the panel: mode 0 at the configured clock
pub fn spi_config() -> SpiConfig {
    SpiConfig {
        frequency: SPI_FREQUENCY,
        ..SpiConfig::default()
    }
}
