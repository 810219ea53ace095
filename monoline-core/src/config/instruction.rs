//! PCD8544 instruction encoding
//!
//! The controller has two instruction pages selected by the `H` bit of
//! FUNCTION SET. Addressing and display control live in the basic page;
//! contrast, bias and temperature compensation in the extended page.

use super::types::{DisplayMode, LcdConfig};

/// FUNCTION SET base opcode
pub const FUNCTION_SET: u8 = 0x20;
/// FUNCTION SET: power down
pub const POWER_DOWN: u8 = 0x04;
/// FUNCTION SET: vertical addressing
pub const VERTICAL_ADDRESSING: u8 = 0x02;
/// FUNCTION SET: extended instruction page
pub const EXTENDED: u8 = 0x01;

/// Select the basic instruction page, horizontal addressing, powered up
pub const BASIC_INSTRUCTIONS: u8 = FUNCTION_SET;
/// Select the extended instruction page, horizontal addressing, powered up
pub const EXTENDED_INSTRUCTIONS: u8 = FUNCTION_SET | EXTENDED;

/// DISPLAY CONTROL base opcode (basic page)
pub const DISPLAY_CONTROL: u8 = 0x08;
/// SET Y ADDRESS base opcode (basic page)
pub const SET_Y_ADDRESS: u8 = 0x40;
/// SET X ADDRESS base opcode (basic page)
pub const SET_X_ADDRESS: u8 = 0x80;

/// TEMPERATURE CONTROL base opcode (extended page)
pub const TEMPERATURE_CONTROL: u8 = 0x04;
/// BIAS SYSTEM base opcode (extended page)
pub const BIAS_SYSTEM: u8 = 0x10;
/// SET VOP base opcode (extended page)
pub const SET_VOP: u8 = 0x80;

/// Largest operating voltage setting
pub const MAX_VOP: u8 = 0x7F;
/// Largest temperature coefficient
pub const MAX_TEMP_COEFF: u8 = 0x03;
/// Largest bias system value
pub const MAX_BIAS: u8 = 0x07;

/// Number of bytes in the configuration sequence
pub const INIT_SEQUENCE_LEN: usize = 6;

/// Column address command
#[inline]
pub const fn set_x_address(column: u8) -> u8 {
    SET_X_ADDRESS | (column & 0x7F)
}

/// Bank address command
#[inline]
pub const fn set_y_address(bank: u8) -> u8 {
    SET_Y_ADDRESS | (bank & 0x07)
}

/// Operating voltage (contrast) command
#[inline]
pub const fn set_vop(vop: u8) -> u8 {
    SET_VOP | (vop & MAX_VOP)
}

/// Temperature coefficient command
#[inline]
pub const fn temperature_control(coeff: u8) -> u8 {
    TEMPERATURE_CONTROL | (coeff & MAX_TEMP_COEFF)
}

/// Bias system command
#[inline]
pub const fn bias_system(bias: u8) -> u8 {
    BIAS_SYSTEM | (bias & MAX_BIAS)
}

/// Display control command for a mode
#[inline]
pub const fn display_control(mode: DisplayMode) -> u8 {
    DISPLAY_CONTROL | mode.bits()
}

/// Command bytes that configure the controller after reset
///
/// Enters the extended page, programs contrast, temperature coefficient
/// and bias, returns to the basic page and selects the display mode.
pub const fn init_sequence(config: &LcdConfig) -> [u8; INIT_SEQUENCE_LEN] {
    [
        EXTENDED_INSTRUCTIONS,
        set_vop(config.contrast),
        temperature_control(config.temp_coeff),
        bias_system(config.bias),
        BASIC_INSTRUCTIONS,
        display_control(config.mode),
    ]
}
