//! Program actions and log lines

use core::fmt;

use crate::angle::Angle;

/// One step of the test program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Block for the given number of milliseconds
    Settle(u32),
    /// Emit one line on the serial log
    Log(LogLine),
    /// Start driving the servo output
    Attach,
    /// Command an absolute servo position
    Move(Angle),
}

impl Action {
    /// Settle duration if this is a wait
    pub fn settle_ms(&self) -> Option<u32> {
        match self {
            Action::Settle(ms) => Some(*ms),
            _ => None,
        }
    }
}

/// A line written to the serial log
///
/// The `Display` impl produces the exact text, without line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLine {
    /// First line after boot
    Starting,
    /// Description of a calibration move
    Calibration(&'static str),
    /// Calibration script finished
    Complete,
    /// Sweep position report
    Position(Angle),
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLine::Starting => f.write_str("Starting servo test..."),
            LogLine::Calibration(description) => f.write_str(description),
            LogLine::Complete => f.write_str("Test complete!"),
            LogLine::Position(angle) => write!(f, "Position: {}", angle),
        }
    }
}
