//! Hardware abstraction traits
//!
//! The renderer is written against [`DisplayTransport`]; the command
//! dispatcher is written against [`Canvas`]. Concrete transports live in
//! `monoline-drivers`.

mod canvas;
mod transport;

pub use canvas::Canvas;
pub use transport::{ByteKind, DisplayTransport};
