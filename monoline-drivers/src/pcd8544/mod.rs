//! PCD8544 (Nokia 5110) LCD driver
//!
//! [`Pcd8544`] owns the [`Renderer`] plus the control lines the transport
//! does not cover: reset, an optional supply switch and an optional
//! backlight.
//!
//! # Lifecycle
//!
//! 1. [`Pcd8544::new()`] - no pin or bus traffic.
//! 2. [`Pcd8544::init()`] - power and reset sequencing, configuration
//!    bytes, full clear.
//! 3. Draw with [`set_pixel()`](Pcd8544::set_pixel),
//!    [`draw_axis_line()`](Pcd8544::draw_axis_line),
//!    [`draw_line()`](Pcd8544::draw_line) and friends. Every call is
//!    written through to the panel; there is no flush step.

use embedded_hal::delay::DelayNs;

use monoline_core::config::instruction::{
    display_control, init_sequence, set_vop, BASIC_INSTRUCTIONS, EXTENDED_INSTRUCTIONS,
    FUNCTION_SET, POWER_DOWN,
};
use monoline_core::config::{ConfigError, DisplayMode, LcdConfig};
use monoline_core::{Canvas, DisplayTransport, Framebuffer, Orientation, RenderError, Renderer};
use monoline_hal::{NoPin, OutputPin};

/// Time VCC is allowed to settle before the reset pulse
const POWER_SETTLE_US: u32 = 1_000;

/// RES low time; the datasheet minimum is 100 ns
const RESET_PULSE_US: u32 = 1;

/// Errors from the LCD driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// Drawing or transport failure
    Render(RenderError<E>),
    /// Invalid configuration value
    Config(ConfigError),
    /// An operation was attempted before [`Pcd8544::init()`]
    NotInitialized,
    /// Drawing was attempted while the controller is powered down
    Asleep,
}

impl<E> From<RenderError<E>> for LcdError<E> {
    fn from(e: RenderError<E>) -> Self {
        LcdError::Render(e)
    }
}

impl<E> From<ConfigError> for LcdError<E> {
    fn from(e: ConfigError) -> Self {
        LcdError::Config(e)
    }
}

/// Driver for one PCD8544 panel
pub struct Pcd8544<T, RST, D, VCC = NoPin, BL = NoPin> {
    renderer: Renderer<T>,
    reset: RST,
    delay: D,
    power: VCC,
    backlight: Option<BL>,
    config: LcdConfig,
    initialized: bool,
    asleep: bool,
}

impl<T, RST, D> Pcd8544<T, RST, D>
where
    T: DisplayTransport,
    RST: OutputPin,
    D: DelayNs,
{
    /// Construct a driver for a module whose VCC is tied to the supply
    /// and whose backlight is not switched
    pub fn new(transport: T, reset: RST, delay: D, config: LcdConfig) -> Self {
        Self::with_pins(transport, reset, delay, NoPin::default(), None, config)
    }
}

impl<T, RST, D, VCC, BL> Pcd8544<T, RST, D, VCC, BL>
where
    T: DisplayTransport,
    RST: OutputPin,
    D: DelayNs,
    VCC: OutputPin,
    BL: OutputPin,
{
    /// Construct a driver with every optional line
    ///
    /// No pin or bus traffic is generated. You **must** call
    /// [`init()`](Self::init) before drawing.
    pub fn with_pins(
        transport: T,
        reset: RST,
        delay: D,
        power: VCC,
        backlight: Option<BL>,
        config: LcdConfig,
    ) -> Self {
        Self {
            renderer: Renderer::new(transport),
            reset,
            delay,
            power,
            backlight,
            config,
            initialized: false,
            asleep: false,
        }
    }

    /// Power up, reset and configure the controller, then clear the panel
    ///
    /// Safe to call again to recover a panel that lost its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::Config`] if the configuration does not fit the
    /// instruction fields (nothing is sent in that case), or
    /// [`LcdError::Render`] if the transport fails.
    pub fn init(&mut self) -> Result<(), LcdError<T::Error>> {
        self.config.validate()?;
        self.initialized = false;
        self.asleep = false;

        self.power_cycle();

        for byte in init_sequence(&self.config) {
            self.renderer.command(byte)?;
        }
        self.renderer.clear()?;

        self.initialized = true;
        #[cfg(feature = "defmt")]
        defmt::debug!("PCD8544 initialised: {}", self.config);
        Ok(())
    }

    /// Supply off, supply on, then a reset strobe
    fn power_cycle(&mut self) {
        self.power.set_low();
        self.reset.set_high();
        self.delay.delay_us(POWER_SETTLE_US);

        self.power.set_high();
        self.delay.delay_us(POWER_SETTLE_US);

        self.reset.set_low();
        self.delay.delay_us(RESET_PULSE_US);
        self.reset.set_high();
    }

    fn ensure_initialized(&self) -> Result<(), LcdError<T::Error>> {
        if !self.initialized {
            Err(LcdError::NotInitialized)
        } else if self.asleep {
            Err(LcdError::Asleep)
        } else {
            Ok(())
        }
    }

    /// Turn on one pixel
    pub fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        Ok(self.renderer.set_pixel(x, y)?)
    }

    /// Turn off one pixel
    pub fn clear_pixel(&mut self, x: i32, y: i32) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        Ok(self.renderer.clear_pixel(x, y)?)
    }

    /// Draw from `(x, y)` to the right or bottom edge
    pub fn draw_axis_line(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        Ok(self.renderer.draw_axis_line(x, y, orientation)?)
    }

    /// Draw the segment between two on-panel points
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        Ok(self.renderer.draw_line(x0, y0, x1, y1)?)
    }

    /// Blank the panel
    pub fn clear(&mut self) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        Ok(self.renderer.clear()?)
    }

    /// Change the operating voltage (contrast), 0-0x7F
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        LcdConfig {
            contrast,
            ..self.config
        }
        .validate()?;

        self.renderer.command(EXTENDED_INSTRUCTIONS)?;
        self.renderer.command(set_vop(contrast))?;
        self.renderer.command(BASIC_INSTRUCTIONS)?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Select blank, all-on, normal or inverse video
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        self.renderer.command(display_control(mode))?;
        self.config.mode = mode;
        Ok(())
    }

    /// Enter power-down; RAM is retained
    ///
    /// Call [`wake()`](Self::wake) before drawing again.
    pub fn sleep(&mut self) -> Result<(), LcdError<T::Error>> {
        self.ensure_initialized()?;
        self.renderer.command(FUNCTION_SET | POWER_DOWN)?;
        self.asleep = true;
        Ok(())
    }

    /// Leave power-down
    pub fn wake(&mut self) -> Result<(), LcdError<T::Error>> {
        if !self.initialized {
            return Err(LcdError::NotInitialized);
        }
        if self.asleep {
            self.renderer.command(BASIC_INSTRUCTIONS)?;
            self.asleep = false;
        }
        Ok(())
    }

    /// Whether the controller is in power-down
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    /// Switch the backlight, if one is wired
    ///
    /// Returns `false` when the module has no switched backlight.
    pub fn set_backlight(&mut self, on: bool) -> bool {
        match self.backlight.as_mut() {
            Some(pin) => {
                pin.set_state(on);
                true
            }
            None => false,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Pixel mirror
    pub fn framebuffer(&self) -> &Framebuffer {
        self.renderer.framebuffer()
    }

    /// Check whether the display has been successfully initialised
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Underlying renderer
    pub fn renderer(&self) -> &Renderer<T> {
        &self.renderer
    }

    /// Consume the driver, returning the transport
    pub fn release(self) -> T {
        self.renderer.release()
    }
}

impl<T, RST, D, VCC, BL> Canvas for Pcd8544<T, RST, D, VCC, BL>
where
    T: DisplayTransport,
    RST: OutputPin,
    D: DelayNs,
    VCC: OutputPin,
    BL: OutputPin,
{
    type Error = LcdError<T::Error>;

    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error> {
        Pcd8544::set_pixel(self, x, y)
    }

    fn clear_pixel(&mut self, x: i32, y: i32) -> Result<(), Self::Error> {
        Pcd8544::clear_pixel(self, x, y)
    }

    fn draw_axis_line(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), Self::Error> {
        Pcd8544::draw_axis_line(self, x, y, orientation)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::Error> {
        Pcd8544::draw_line(self, x0, y0, x1, y1)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Pcd8544::clear(self)
    }

    fn framebuffer(&self) -> &Framebuffer {
        Pcd8544::framebuffer(self)
    }
}

#[cfg(test)]
mod tests;
