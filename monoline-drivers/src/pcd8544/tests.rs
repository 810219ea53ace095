extern crate std;

use super::*;
use crate::ControllerModel;
use core::cell::RefCell;
use embedded_hal::delay::DelayNs;
use monoline_core::config::ConfigError;
use std::rc::Rc;
use std::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    ResetHigh,
    ResetLow,
    PowerHigh,
    PowerLow,
    DelayNs(u32),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct ResetPin(Log, bool);
struct PowerPin(Log, bool);

impl OutputPin for ResetPin {
    fn set_high(&mut self) {
        self.1 = true;
        self.0.borrow_mut().push(Event::ResetHigh);
    }
    fn set_low(&mut self) {
        self.1 = false;
        self.0.borrow_mut().push(Event::ResetLow);
    }
    fn is_set_high(&self) -> bool {
        self.1
    }
}

impl OutputPin for PowerPin {
    fn set_high(&mut self) {
        self.1 = true;
        self.0.borrow_mut().push(Event::PowerHigh);
    }
    fn set_low(&mut self) {
        self.1 = false;
        self.0.borrow_mut().push(Event::PowerLow);
    }
    fn is_set_high(&self) -> bool {
        self.1
    }
}

struct MockDelay(Log);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::DelayNs(ns));
    }
}

fn driver(config: LcdConfig) -> (Pcd8544<ControllerModel, ResetPin, MockDelay>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let lcd = Pcd8544::new(
        ControllerModel::new(),
        ResetPin(log.clone(), false),
        MockDelay(log.clone()),
        config,
    );
    (lcd, log)
}

fn ready() -> Pcd8544<ControllerModel, ResetPin, MockDelay> {
    let (mut lcd, _) = driver(LcdConfig::default());
    lcd.init().unwrap();
    lcd
}

#[test]
fn test_drawing_before_init_is_rejected() {
    let (mut lcd, _) = driver(LcdConfig::default());
    assert_eq!(lcd.set_pixel(0, 0), Err(LcdError::NotInitialized));
    assert_eq!(lcd.draw_line(0, 0, 5, 5), Err(LcdError::NotInitialized));
    assert_eq!(lcd.clear(), Err(LcdError::NotInitialized));
    assert!(!lcd.is_initialized());
    assert_eq!(lcd.renderer().transport().command_count(), 0);
}

#[test]
fn test_init_configures_controller_and_clears_ram() {
    let lcd = ready();
    let model = lcd.renderer().transport();

    assert!(lcd.is_initialized());
    assert_eq!(model.vop(), 0x3C);
    assert_eq!(model.bias(), 3);
    assert_eq!(model.temp_coeff(), 0);
    assert_eq!(model.mode(), DisplayMode::Normal);
    assert!(!model.is_extended());
    assert!(!model.is_powered_down());

    assert!(model.matches(lcd.framebuffer()));
    assert!(lcd.framebuffer().is_blank());
    // 6 configuration bytes, then 2 addressing commands per bank
    assert_eq!(model.command_count(), 6 + 12);
    assert_eq!(model.data_count(), 504);
}

#[test]
fn test_reset_strobe_follows_power_settle() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut lcd = Pcd8544::with_pins(
        ControllerModel::new(),
        ResetPin(log.clone(), false),
        MockDelay(log.clone()),
        PowerPin(log.clone(), false),
        None::<NoPin>,
        LcdConfig::default(),
    );
    lcd.init().unwrap();

    let events = log.borrow();
    assert_eq!(
        &events[..],
        &[
            Event::PowerLow,
            Event::ResetHigh,
            Event::DelayNs(1_000_000),
            Event::PowerHigh,
            Event::DelayNs(1_000_000),
            Event::ResetLow,
            Event::DelayNs(1_000),
            Event::ResetHigh,
        ]
    );
}

#[test]
fn test_invalid_config_sends_nothing() {
    let config = LcdConfig {
        bias: 9,
        ..LcdConfig::default()
    };
    let (mut lcd, log) = driver(config);

    assert_eq!(
        lcd.init(),
        Err(LcdError::Config(ConfigError::BiasOutOfRange(9)))
    );
    assert!(!lcd.is_initialized());
    assert!(log.borrow().is_empty());
    assert_eq!(lcd.renderer().transport().command_count(), 0);
}

#[test]
fn test_drawing_reaches_panel() {
    let mut lcd = ready();
    lcd.draw_line(0, 0, 83, 47).unwrap();
    lcd.draw_axis_line(10, 5, Orientation::Horizontal).unwrap();
    lcd.clear_pixel(0, 0).unwrap();

    let model = lcd.renderer().transport();
    assert!(model.matches(lcd.framebuffer()));
    assert_eq!(model.lit(0, 0), Some(false));
    assert_eq!(model.lit(83, 47), Some(true));
    assert_eq!(model.lit(83, 5), Some(true));
}

#[test]
fn test_out_of_range_surfaces_render_error() {
    let mut lcd = ready();
    assert!(matches!(
        lcd.set_pixel(84, 0),
        Err(LcdError::Render(RenderError::OutOfRange(_)))
    ));
}

#[test]
fn test_set_contrast() {
    let mut lcd = ready();
    lcd.set_contrast(0x50).unwrap();

    assert_eq!(lcd.renderer().transport().vop(), 0x50);
    assert!(!lcd.renderer().transport().is_extended());
    assert_eq!(lcd.config().contrast, 0x50);

    assert_eq!(
        lcd.set_contrast(0x80),
        Err(LcdError::Config(ConfigError::ContrastOutOfRange(0x80)))
    );
    assert_eq!(lcd.config().contrast, 0x50);
}

#[test]
fn test_set_display_mode() {
    let mut lcd = ready();
    lcd.set_pixel(1, 1).unwrap();
    lcd.set_display_mode(DisplayMode::Inverse).unwrap();

    let model = lcd.renderer().transport();
    assert_eq!(model.mode(), DisplayMode::Inverse);
    assert_eq!(model.lit(1, 1), Some(false));
    assert_eq!(model.lit(2, 2), Some(true));
    assert_eq!(lcd.config().mode, DisplayMode::Inverse);
}

#[test]
fn test_sleep_and_wake() {
    let mut lcd = ready();
    lcd.set_pixel(3, 3).unwrap();
    lcd.sleep().unwrap();

    assert!(lcd.is_asleep());
    assert!(lcd.renderer().transport().is_powered_down());
    assert_eq!(lcd.set_pixel(4, 4), Err(LcdError::Asleep));

    lcd.wake().unwrap();
    assert!(!lcd.renderer().transport().is_powered_down());
    lcd.set_pixel(4, 4).unwrap();

    // RAM survives power-down
    let model = lcd.renderer().transport();
    assert_eq!(model.lit(3, 3), Some(true));
    assert!(model.matches(lcd.framebuffer()));
}

#[test]
fn test_wake_before_init_is_rejected() {
    let (mut lcd, _) = driver(LcdConfig::default());
    assert_eq!(lcd.wake(), Err(LcdError::NotInitialized));
}

#[test]
fn test_backlight() {
    let mut lcd = ready();
    assert!(!lcd.set_backlight(true));

    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut lit = Pcd8544::with_pins(
        ControllerModel::new(),
        ResetPin(log.clone(), false),
        MockDelay(log.clone()),
        NoPin::default(),
        Some(PowerPin(log.clone(), false)),
        LcdConfig::default(),
    );
    assert!(lit.set_backlight(true));
    assert_eq!(log.borrow().last(), Some(&Event::PowerHigh));
}

#[test]
fn test_canvas_impl_delegates() {
    fn draw<C: Canvas>(canvas: &mut C) -> Result<(), C::Error> {
        canvas.draw_line(0, 47, 83, 0)
    }

    let mut lcd = ready();
    draw(&mut lcd).unwrap();
    assert_eq!(Canvas::framebuffer(&lcd).pixel(0, 47), Some(true));
    assert!(lcd.renderer().transport().matches(lcd.framebuffer()));
}
