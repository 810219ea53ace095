//! Simulated PCD8544 controller
//!
//! [`ControllerModel`] decodes the same byte stream the real controller
//! receives and keeps its own copy of display RAM. It implements
//! [`DisplayTransport`], so a [`Renderer`](monoline_core::Renderer) or a
//! [`Pcd8544`](crate::Pcd8544) can drive it directly on the host. Tests
//! use it to check that the renderer's mirror and the panel never drift
//! apart.

use core::convert::Infallible;

use monoline_core::config::instruction::{EXTENDED, POWER_DOWN, VERTICAL_ADDRESSING};
use monoline_core::config::DisplayMode;
use monoline_core::{ByteKind, DisplayTransport, Framebuffer, BANKS, WIDTH};

/// Host-side model of the controller state
#[derive(Debug, Clone)]
pub struct ControllerModel {
    /// Display RAM, indexed `[column][bank]` like [`Framebuffer`]
    ram: [[u8; BANKS]; WIDTH],
    x_addr: u8,
    y_addr: u8,
    extended: bool,
    vertical_addressing: bool,
    power_down: bool,
    mode: DisplayMode,
    vop: u8,
    bias: u8,
    temp_coeff: u8,
    commands: u32,
    data_writes: u32,
}

impl Default for ControllerModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerModel {
    /// Controller state right after reset
    ///
    /// Real RAM contents are undefined after power-up; the model fills it
    /// with a pattern so a missing clear shows up in comparisons.
    pub fn new() -> Self {
        Self {
            ram: [[0xA5; BANKS]; WIDTH],
            x_addr: 0,
            y_addr: 0,
            extended: false,
            vertical_addressing: false,
            power_down: true,
            mode: DisplayMode::Blank,
            vop: 0,
            bias: 0,
            temp_coeff: 0,
            commands: 0,
            data_writes: 0,
        }
    }

    /// Decode one instruction byte
    pub fn receive_command(&mut self, byte: u8) {
        self.commands += 1;

        // FUNCTION SET is decoded identically in both pages
        if byte & 0xF8 == 0x20 {
            self.power_down = byte & POWER_DOWN != 0;
            self.vertical_addressing = byte & VERTICAL_ADDRESSING != 0;
            self.extended = byte & EXTENDED != 0;
            return;
        }

        if self.extended {
            if byte & 0x80 != 0 {
                self.vop = byte & 0x7F;
            } else if byte & 0xF0 == 0x10 {
                self.bias = byte & 0x07;
            } else if byte & 0xFC == 0x04 {
                self.temp_coeff = byte & 0x03;
            }
        } else if byte & 0x80 != 0 {
            let x = byte & 0x7F;
            self.x_addr = if (x as usize) < WIDTH { x } else { 0 };
        } else if byte & 0xC0 == 0x40 {
            let y = byte & 0x07;
            self.y_addr = if (y as usize) < BANKS { y } else { 0 };
        } else if byte & 0xF8 == 0x08 {
            self.mode = match byte & 0x05 {
                0b000 => DisplayMode::Blank,
                0b001 => DisplayMode::AllOn,
                0b100 => DisplayMode::Normal,
                _ => DisplayMode::Inverse,
            };
        }
        // Anything else is a NOP
    }

    /// Store one RAM byte at the address pointer and advance it
    pub fn receive_data(&mut self, byte: u8) {
        self.data_writes += 1;
        self.ram[self.x_addr as usize][self.y_addr as usize] = byte;

        if self.vertical_addressing {
            self.y_addr += 1;
            if self.y_addr as usize >= BANKS {
                self.y_addr = 0;
                self.x_addr = (self.x_addr + 1) % WIDTH as u8;
            }
        } else {
            self.x_addr += 1;
            if self.x_addr as usize >= WIDTH {
                self.x_addr = 0;
                self.y_addr = (self.y_addr + 1) % BANKS as u8;
            }
        }
    }

    /// RAM byte at a column and bank
    pub fn ram(&self, column: usize, bank: usize) -> Option<u8> {
        self.ram.get(column)?.get(bank).copied()
    }

    /// Visible state of a pixel, taking the display mode into account
    pub fn lit(&self, x: usize, y: usize) -> Option<bool> {
        let bit = self.ram(x, y / 8)? & (1 << (y % 8)) != 0;
        Some(match self.mode {
            DisplayMode::Blank => false,
            DisplayMode::AllOn => true,
            DisplayMode::Normal => bit,
            DisplayMode::Inverse => !bit,
        })
    }

    /// True when RAM holds exactly what the mirror holds
    pub fn matches(&self, framebuffer: &Framebuffer) -> bool {
        &self.ram == framebuffer.cells()
    }

    /// Current RAM address pointer `(column, bank)`
    pub fn address(&self) -> (u8, u8) {
        (self.x_addr, self.y_addr)
    }

    /// Active display mode
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Operating voltage register
    pub fn vop(&self) -> u8 {
        self.vop
    }

    /// Bias system register
    pub fn bias(&self) -> u8 {
        self.bias
    }

    /// Temperature coefficient register
    pub fn temp_coeff(&self) -> u8 {
        self.temp_coeff
    }

    /// Whether the extended instruction page is selected
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Whether the chip is in power-down
    pub fn is_powered_down(&self) -> bool {
        self.power_down
    }

    /// Instruction bytes received
    pub fn command_count(&self) -> u32 {
        self.commands
    }

    /// Data bytes received
    pub fn data_count(&self) -> u32 {
        self.data_writes
    }

    /// Reset the byte counters
    pub fn reset_counters(&mut self) {
        self.commands = 0;
        self.data_writes = 0;
    }
}

impl DisplayTransport for ControllerModel {
    type Error = Infallible;

    fn write_byte(&mut self, value: u8, kind: ByteKind) -> Result<(), Infallible> {
        match kind {
            ByteKind::Command => self.receive_command(value),
            ByteKind::Data => self.receive_data(value),
        }
        Ok(())
    }
}
