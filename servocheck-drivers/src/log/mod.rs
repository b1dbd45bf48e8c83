//! Log sink implementations
//!
//! - Serial: text lines written to a blocking UART transmitter

pub mod serial;

pub use serial::SerialLog;
