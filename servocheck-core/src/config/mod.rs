//! Compile-time configuration
//!
//! The smoke test has no runtime configuration. Every tunable is a
//! constant here or in the firmware's board definition.

pub mod timing;

pub use timing::*;

/// Serial log baud rate
pub const SERIAL_BAUDRATE: u32 = 115_200;
