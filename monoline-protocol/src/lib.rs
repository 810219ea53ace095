//! Monoline text command console
//!
//! Operators drive the renderer over a serial console with one command per
//! line:
//!
//! ```text
//! nokLcdDrawLine 0,0 83,47
//! nokLcdDrawScrnLine 10 5 0
//! nokLcdClear
//! ```
//!
//! Tokens are separated by spaces, commas or tabs. The first token names
//! the command; the rest are decimal integers. A line is either executed
//! in full or rejected before anything is drawn.
//!
//! - [`assembler`] - collects UART bytes into lines
//! - [`command`] - command table and line parser
//! - [`dispatch`] - runs a parsed command against a [`Canvas`](monoline_core::Canvas)
//! - [`console`] - all three chained, one byte at a time

#![no_std]
#![deny(unsafe_code)]

pub mod assembler;
pub mod command;
pub mod console;
pub mod dispatch;

pub use assembler::{LineAssembler, LineError, MAX_LINE_LEN};
pub use command::{parse_line, Command, CommandSpec, ParseError, COMMANDS};
pub use console::{Console, ConsoleError, Outcome};
pub use dispatch::{execute, DispatchError};
