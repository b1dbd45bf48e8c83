//! Serial text log over a blocking UART
//!
//! [`SerialLog`] adapts any [`UartTx`] to `core::fmt::Write`, so the
//! controller can format lines straight onto the wire without a buffer.
//! Transport errors are reported as `fmt::Error`; nothing is retried.

use core::fmt;

use servocheck_hal::UartTx;

/// `core::fmt::Write` adapter for a UART transmitter
pub struct SerialLog<T> {
    tx: T,
}

impl<T: UartTx> SerialLog<T> {
    /// Wrap a UART transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Wait for all queued bytes to leave the transmitter
    pub fn flush(&mut self) -> Result<(), T::Error> {
        self.tx.flush()
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> fmt::Write for SerialLog<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.write_str_blocking(s).map_err(|_| fmt::Error)
    }
}
