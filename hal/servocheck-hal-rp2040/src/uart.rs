//! Blocking UART transmitter
//!
//! Wraps `embassy_rp::uart::UartTx` in blocking mode and implements the
//! shared [`servocheck_hal::UartTx`] trait for it.

use embassy_rp::uart::{self, Blocking};

use servocheck_hal::uart::{DataBits, Parity, StopBits};
use servocheck_hal::{UartConfig, UartTx};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Break condition
    Break,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Configuration the peripheral cannot do
    Unsupported,
    /// Other error
    Other,
}

impl From<uart::Error> for UartBusError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => UartBusError::Framing,
            uart::Error::Break => UartBusError::Break,
            uart::Error::Overrun => UartBusError::Overrun,
            uart::Error::Parity => UartBusError::Parity,
            #[allow(unreachable_patterns)]
            _ => UartBusError::Other,
        }
    }
}

/// Convert the shared UART configuration to the embassy-rp one
///
/// RP2040 supports 5 to 8 data bits, so nine-bit frames are rejected.
pub fn to_rp_config(config: &UartConfig) -> Result<uart::Config, UartBusError> {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return Err(UartBusError::Unsupported),
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Ok(cfg)
}

/// Blocking UART transmitter
pub struct RpUartTx<'d> {
    tx: uart::UartTx<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    /// Wrap a blocking transmitter
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for RpUartTx<'_> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data).map_err(UartBusError::from)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(UartBusError::from)
    }
}
