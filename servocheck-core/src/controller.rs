//! Servo test controller
//!
//! Executes the [`TestProgram`] against a servo output and a text sink.
//! The controller never waits itself: [`ServoTestController::advance`]
//! runs actions up to the next settle and hands its duration back, so the
//! caller can block with whatever timer the platform has.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = ServoTestController::new(servo, log, TestTiming::default());
//! loop {
//!     let wait_ms = controller.advance();
//!     Timer::after_millis(wait_ms.into()).await;
//! }
//! ```

use core::fmt::Write;

use crate::angle::Angle;
use crate::config::TestTiming;
use crate::program::{Action, LogLine, Phase, TestProgram};
use crate::traits::ServoOutput;

/// Terminator appended to every log line
pub const LINE_ENDING: &str = "\r\n";

/// Counters for everything the controller has done
///
/// Failed commands and lines are not retried; they are only counted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerStats {
    /// Servo commands issued (including failed ones)
    pub moves: u32,
    /// Servo commands or attach requests the output rejected
    pub dropped_moves: u32,
    /// Log lines written (including failed ones)
    pub lines: u32,
    /// Log lines the sink rejected
    pub dropped_lines: u32,
    /// Total time requested for settling (ms, wraps)
    pub settled_ms: u32,
}

impl ControllerStats {
    /// Total failures of either channel
    pub fn dropped(&self) -> u32 {
        self.dropped_moves.saturating_add(self.dropped_lines)
    }
}

/// Runs the smoke test against abstract outputs
pub struct ServoTestController<S, W> {
    program: TestProgram,
    servo: S,
    log: W,
    position: Option<Angle>,
    stats: ControllerStats,
}

impl<S, W> ServoTestController<S, W>
where
    S: ServoOutput,
    W: Write,
{
    /// Create a controller for the standard program
    pub fn new(servo: S, log: W, timing: TestTiming) -> Self {
        Self::with_program(servo, log, TestProgram::new(timing))
    }

    /// Create a controller for a specific program
    pub fn with_program(servo: S, log: W, program: TestProgram) -> Self {
        Self {
            program,
            servo,
            log,
            position: None,
            stats: ControllerStats::default(),
        }
    }

    /// Execute a single action
    ///
    /// Returns the wait duration for [`Action::Settle`], `None` otherwise.
    pub fn execute(&mut self, action: Action) -> Option<u32> {
        match action {
            Action::Settle(ms) => {
                self.stats.settled_ms = self.stats.settled_ms.wrapping_add(ms);
                return Some(ms);
            }
            Action::Log(line) => self.write_line(line),
            Action::Attach => {
                if self.servo.attach().is_err() {
                    self.stats.dropped_moves = self.stats.dropped_moves.saturating_add(1);
                }
            }
            Action::Move(angle) => {
                self.stats.moves = self.stats.moves.wrapping_add(1);
                // The commanded position is tracked even if the output dropped it
                self.position = Some(angle);
                if self.servo.set_angle(angle).is_err() {
                    self.stats.dropped_moves = self.stats.dropped_moves.saturating_add(1);
                }
            }
        }
        None
    }

    /// Run actions up to and including the next settle
    ///
    /// Returns how long the caller must wait (ms) before advancing again.
    pub fn advance(&mut self) -> u32 {
        loop {
            let action = self.program.next_action();
            if let Some(ms) = self.execute(action) {
                return ms;
            }
        }
    }

    fn write_line(&mut self, line: LogLine) {
        self.stats.lines = self.stats.lines.wrapping_add(1);
        if write!(self.log, "{}{}", line, LINE_ENDING).is_err() {
            self.stats.dropped_lines = self.stats.dropped_lines.saturating_add(1);
        }
    }

    /// Phase of the next action
    pub fn phase(&self) -> Phase {
        self.program.phase()
    }

    /// Last commanded angle
    pub fn position(&self) -> Option<Angle> {
        self.position
    }

    /// Execution counters
    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    /// Number of sweeps finished so far
    pub fn completed_sweeps(&self) -> u32 {
        self.program.completed_sweeps()
    }

    /// Borrow the servo output
    pub fn servo(&self) -> &S {
        &self.servo
    }

    /// Borrow the log sink
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Release the outputs
    pub fn into_parts(self) -> (S, W) {
        (self.servo, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt;
    use heapless::{String, Vec};

    /// Servo that records every command
    #[derive(Default)]
    struct MockServo {
        attached: bool,
        commands: Vec<Angle, 512>,
        /// Commands issued before attach
        early_commands: u32,
        fail: bool,
    }

    impl ServoOutput for MockServo {
        type Error = ();

        fn attach(&mut self) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.attached = true;
            Ok(())
        }

        fn detach(&mut self) -> Result<(), ()> {
            self.attached = false;
            Ok(())
        }

        fn is_attached(&self) -> bool {
            self.attached
        }

        fn set_angle(&mut self, angle: Angle) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            if !self.attached {
                self.early_commands += 1;
            }
            self.commands.push(angle).map_err(|_| ())
        }

        fn angle(&self) -> Option<Angle> {
            self.commands.last().copied()
        }
    }

    /// Sink that rejects everything
    struct BrokenLog;

    impl fmt::Write for BrokenLog {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn controller() -> ServoTestController<MockServo, String<8192>> {
        ServoTestController::new(MockServo::default(), String::new(), TestTiming::default())
    }

    #[test]
    fn test_initialization_waits() {
        let mut ctl = controller();

        assert_eq!(ctl.advance(), 1000);
        // Nothing is logged before the boot settle has been waited out
        assert!(ctl.log().is_empty());
        assert!(!ctl.servo().is_attached());

        for _ in 0..4 {
            assert_eq!(ctl.advance(), 2000);
        }
        assert!(ctl.servo().is_attached());
        assert_eq!(ctl.servo().commands.as_slice(), &[
            Angle::CENTER,
            Angle::MIN,
            Angle::MAX,
            Angle::CENTER,
        ]);

        assert_eq!(ctl.advance(), 100);
        assert_eq!(ctl.phase(), Phase::Sweep);
        assert_eq!(ctl.servo().early_commands, 0);
    }

    #[test]
    fn test_log_transcript() {
        let mut ctl = controller();
        // Boot, four calibration steps, two sweep steps
        for _ in 0..7 {
            ctl.advance();
        }

        let expected = "Starting servo test...\r\n\
                        Moving to 90 degrees (center)\r\n\
                        Moving to 0 degrees\r\n\
                        Moving to 180 degrees\r\n\
                        Moving back to 90 degrees\r\n\
                        Test complete!\r\n\
                        Position: 0\r\n\
                        Position: 5\r\n";
        assert_eq!(ctl.log().as_str(), expected);
    }

    #[test]
    fn test_sweep_cycle_trace() {
        let mut ctl = controller();
        for _ in 0..5 {
            ctl.advance();
        }
        for _ in 0..74 {
            assert_eq!(ctl.advance(), 100);
        }

        let trace = &ctl.servo().commands[4..];
        assert_eq!(trace.len(), 74);
        assert_eq!(trace[0], Angle::MIN);
        assert_eq!(trace[73], Angle::MIN);
        assert_eq!(trace.iter().position(|&a| a == Angle::MAX), Some(36));
        assert!(trace[..37].windows(2).all(|w| w[0] < w[1]));
        assert!(trace[37..].windows(2).all(|w| w[0] > w[1]));
        assert_eq!(ctl.completed_sweeps(), 1);
        assert_eq!(ctl.position(), Some(Angle::MIN));
    }

    #[test]
    fn test_every_move_is_logged_in_order() {
        let mut ctl = controller();
        for _ in 0..(5 + 40) {
            ctl.advance();
        }

        let (servo, log) = ctl.into_parts();
        let positions = log.lines().filter_map(|line| line.strip_prefix("Position: "));
        let mut count = 0;
        for (logged, commanded) in positions.zip(servo.commands[4..].iter()) {
            assert_eq!(logged.parse::<u8>(), Ok(commanded.degrees()));
            count += 1;
        }
        assert_eq!(count, 40);
    }

    #[test]
    fn test_stats() {
        let mut ctl = controller();
        for _ in 0..7 {
            ctl.advance();
        }

        let stats = ctl.stats();
        assert_eq!(stats.moves, 6);
        assert_eq!(stats.lines, 8);
        assert_eq!(stats.dropped(), 0);
        assert_eq!(stats.settled_ms, 1000 + 4 * 2000 + 2 * 100);
    }

    #[test]
    fn test_failures_are_counted_not_fatal() {
        let servo = MockServo {
            fail: true,
            ..MockServo::default()
        };
        let mut ctl = ServoTestController::new(servo, BrokenLog, TestTiming::default());

        for _ in 0..10 {
            ctl.advance();
        }

        let stats = ctl.stats();
        // Attach plus four calibration moves plus five sweep moves
        assert_eq!(stats.dropped_moves, 10);
        assert_eq!(stats.dropped_lines, stats.lines);
        assert_eq!(ctl.phase(), Phase::Sweep);
        // The commanded position is still tracked
        assert_eq!(ctl.position(), Some(Angle::new(20).unwrap()));
    }
}
