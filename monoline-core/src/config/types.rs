//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::instruction::{MAX_BIAS, MAX_TEMP_COEFF, MAX_VOP};

/// Display control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayMode {
    /// All segments off
    Blank,
    /// All segments on
    AllOn,
    /// RAM bit set = dark pixel
    #[default]
    Normal,
    /// RAM bit set = light pixel
    Inverse,
}

impl DisplayMode {
    /// D and E bits of DISPLAY CONTROL
    pub const fn bits(self) -> u8 {
        match self {
            DisplayMode::Blank => 0b000,
            DisplayMode::AllOn => 0b001,
            DisplayMode::Normal => 0b100,
            DisplayMode::Inverse => 0b101,
        }
    }
}

/// Errors from configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Operating voltage above 0x7F
    ContrastOutOfRange(u8),
    /// Temperature coefficient above 3
    TempCoeffOutOfRange(u8),
    /// Bias system above 7
    BiasOutOfRange(u8),
}

/// Controller settings applied during initialisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcdConfig {
    /// Operating voltage, 0-0x7F (higher is darker)
    pub contrast: u8,
    /// Temperature coefficient, 0-3
    pub temp_coeff: u8,
    /// Bias system, 0-7 (1:48 multiplex wants 3 or 4)
    pub bias: u8,
    /// Display mode selected at the end of initialisation
    pub mode: DisplayMode,
}

impl LcdConfig {
    /// Reference settings for the common red/blue 5110 breakout
    pub const DEFAULT: Self = Self {
        contrast: 0x3C,
        temp_coeff: 0,
        bias: 3,
        mode: DisplayMode::Normal,
    };

    /// Check that every field fits its instruction bit field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contrast > MAX_VOP {
            return Err(ConfigError::ContrastOutOfRange(self.contrast));
        }
        if self.temp_coeff > MAX_TEMP_COEFF {
            return Err(ConfigError::TempCoeffOutOfRange(self.temp_coeff));
        }
        if self.bias > MAX_BIAS {
            return Err(ConfigError::BiasOutOfRange(self.bias));
        }
        Ok(())
    }
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
