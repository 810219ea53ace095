//! Monoline - Nokia 5110 LCD console firmware
//!
//! Drives a PCD8544 panel from an RP2040 and accepts drawing commands on
//! UART0 (115200 8N1).
//!
//! Wiring (Raspberry Pi Pico):
//!
//! | Panel | GPIO |
//! |-------|------|
//! | CLK   | 18   |
//! | DIN   | 19   |
//! | CE    | 17   |
//! | DC    | 20   |
//! | RST   | 21   |
//! | LIGHT | 22   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use monoline_drivers::{Pcd8544, SpiTransport};
use monoline_hal::{EhOutputPin, EhSpiBus, NoPin, Phase, Polarity};

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Monoline firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Transmit-only SPI; the panel has no data output
    let spi_config = config::spi_config();
    let mut rp_spi_config = spi::Config::default();
    rp_spi_config.frequency = spi_config.frequency;
    rp_spi_config.polarity = match spi_config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    rp_spi_config.phase = match spi_config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, rp_spi_config);
    info!("SPI initialized at {} Hz", spi_config.frequency);

    // SCE is active low: start deselected
    let ce = EhOutputPin::new(Output::new(p.PIN_17, Level::High), true);
    let dc = EhOutputPin::new(Output::new(p.PIN_20, Level::Low), false);
    let rst = EhOutputPin::new(Output::new(p.PIN_21, Level::High), true);
    let light = EhOutputPin::new(Output::new(p.PIN_22, Level::Low), false);

    let transport = SpiTransport::new(EhSpiBus::new(spi), dc, ce);
    let mut lcd: tasks::Lcd = Pcd8544::with_pins(
        transport,
        rst,
        Delay,
        NoPin::default(),
        Some(light),
        config::LCD_CONFIG,
    );

    match lcd.init() {
        Ok(()) => info!("LCD initialized: {}", lcd.config()),
        Err(e) => error!("LCD init failed: {:?}", e),
    }
    lcd.set_backlight(config::BACKLIGHT_ON);

    // Setup UART for the operator console
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for console");

    spawner.spawn(tasks::console_task(rx, tx, lcd)).unwrap();

    info!("All tasks spawned, system running");
}
