//! Serial console task
//!
//! Reads operator lines from the UART, runs them on the LCD and replies
//! with a status code: `0` on success, otherwise the command's failure
//! code followed by the reason.

use core::fmt::Write as _;

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::Delay;
use embedded_io_async::{Read, Write};
use heapless::String;

use monoline_drivers::{Pcd8544, SpiTransport};
use monoline_hal::{EhOutputPin, EhSpiBus, NoPin};
use monoline_protocol::{Console, Outcome};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Longest reply line
const REPLY_LEN: usize = 96;

type Pin = EhOutputPin<Output<'static>>;

/// The panel as wired on this board
pub type Lcd = Pcd8544<
    SpiTransport<EhSpiBus<Spi<'static, SPI0, Blocking>>, Pin, Pin>,
    Pin,
    Delay,
    NoPin,
    Pin,
>;

/// Console task - assembles lines from the UART and draws them
#[embassy_executor::task]
pub async fn console_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx, mut lcd: Lcd) {
    info!("Console task started");

    let mut console: Console = Console::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if let Some(outcome) = console.feed(byte, &mut lcd) {
                        report(&outcome);
                        reply(&mut tx, &outcome).await;
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                console.reset();
            }
        }
    }
}

fn report<E: Format>(outcome: &Outcome<E>) {
    match outcome {
        Ok(command) => debug!("Accepted: {}", command),
        Err(e) => warn!("Rejected: {}", e),
    }
}

async fn reply<E: core::fmt::Debug>(tx: &mut BufferedUartTx, outcome: &Outcome<E>) {
    let mut line: String<REPLY_LEN> = String::new();
    // Overlong reasons are cut short; the status code always fits
    let _ = match outcome {
        Ok(_) => write!(line, "0"),
        Err(e) => write!(line, "{} {}", e.status_code(), e),
    };
    line.truncate(REPLY_LEN - 2);
    let _ = line.push_str("\r\n");

    if let Err(e) = tx.write_all(line.as_bytes()).await {
        warn!("UART write error: {:?}", e);
    }
}
