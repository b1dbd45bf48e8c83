//! The complete test program
//!
//! [`TestProgram`] yields the smoke test as an endless stream of actions:
//!
//! ```text
//! Settle(boot)  Log(Starting)  Attach
//! for each calibration step:   Log(description)  Move(angle)  Settle(calibration)
//! Log(Complete)
//! forever, for each sweep angle:  Move(angle)  Log(Position(angle))  Settle(step delay)
//! ```
//!
//! The last calibration position jumps straight to the first sweep position
//! with no extra settle in between.

use super::action::{Action, LogLine};
use super::calibration::{CalibrationStep, CALIBRATION_SCRIPT};
use super::sweep::SweepCycle;
use crate::angle::Angle;
use crate::config::TestTiming;

/// Coarse program phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the serial link, announcing, attaching the output
    Boot,
    /// Running the calibration script
    Calibration,
    /// Sweeping forever
    Sweep,
}

/// Part of a calibration step still to be emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalibrationPart {
    Describe,
    Move,
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    BootSettle,
    Announce,
    Attach,
    Calibration {
        index: usize,
        step: CalibrationStep,
        part: CalibrationPart,
    },
    Complete,
    SweepMove,
    SweepReport(Angle),
    SweepSettle,
}

impl Stage {
    fn phase(&self) -> Phase {
        match self {
            Stage::BootSettle | Stage::Announce | Stage::Attach => Phase::Boot,
            Stage::Calibration { .. } | Stage::Complete => Phase::Calibration,
            Stage::SweepMove | Stage::SweepReport(_) | Stage::SweepSettle => Phase::Sweep,
        }
    }
}

/// Endless action stream for the smoke test
#[derive(Debug, Clone)]
pub struct TestProgram {
    timing: TestTiming,
    script: &'static [CalibrationStep],
    sweep: SweepCycle,
    stage: Stage,
}

impl TestProgram {
    /// Create the program with the standard calibration script
    pub fn new(timing: TestTiming) -> Self {
        Self::with_script(timing, &CALIBRATION_SCRIPT)
    }

    /// Create the program with a custom calibration script
    pub fn with_script(timing: TestTiming, script: &'static [CalibrationStep]) -> Self {
        Self {
            timing,
            script,
            sweep: SweepCycle::new(timing.sweep_step_deg),
            stage: Stage::BootSettle,
        }
    }

    /// Phase of the next action to be produced
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// Timing in use
    pub fn timing(&self) -> &TestTiming {
        &self.timing
    }

    /// Number of sweeps finished so far
    pub fn completed_sweeps(&self) -> u32 {
        self.sweep.completed_sweeps()
    }

    /// Stage that starts calibration step `index`, or completion past the end
    fn calibration_stage(&self, index: usize) -> Stage {
        match self.script.get(index) {
            Some(step) => Stage::Calibration {
                index,
                step: *step,
                part: CalibrationPart::Describe,
            },
            None => Stage::Complete,
        }
    }

    /// Produce the next action
    pub fn next_action(&mut self) -> Action {
        let (action, next) = match self.stage {
            Stage::BootSettle => (Action::Settle(self.timing.boot_settle_ms), Stage::Announce),
            Stage::Announce => (Action::Log(LogLine::Starting), Stage::Attach),
            Stage::Attach => (Action::Attach, self.calibration_stage(0)),
            Stage::Calibration { index, step, part } => match part {
                CalibrationPart::Describe => (
                    Action::Log(LogLine::Calibration(step.description)),
                    Stage::Calibration {
                        index,
                        step,
                        part: CalibrationPart::Move,
                    },
                ),
                CalibrationPart::Move => (
                    Action::Move(step.angle),
                    Stage::Calibration {
                        index,
                        step,
                        part: CalibrationPart::Settle,
                    },
                ),
                CalibrationPart::Settle => (
                    Action::Settle(self.timing.calibration_settle_ms),
                    self.calibration_stage(index + 1),
                ),
            },
            Stage::Complete => (Action::Log(LogLine::Complete), Stage::SweepMove),
            Stage::SweepMove => {
                let angle = self.sweep.next_angle();
                (Action::Move(angle), Stage::SweepReport(angle))
            }
            Stage::SweepReport(angle) => (
                Action::Log(LogLine::Position(angle)),
                Stage::SweepSettle,
            ),
            Stage::SweepSettle => (
                Action::Settle(self.timing.sweep_step_delay_ms),
                Stage::SweepMove,
            ),
        };

        self.stage = next;
        action
    }
}

impl Default for TestProgram {
    fn default() -> Self {
        Self::new(TestTiming::default())
    }
}

impl Iterator for TestProgram {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        Some(self.next_action())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
