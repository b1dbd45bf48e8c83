//! Test program definition
//!
//! The whole smoke test is a fixed, endless stream of [`Action`]s:
//! boot settle, calibration script, then alternating sweeps. Producing the
//! stream is pure logic; executing it is the controller's job.

pub mod action;
pub mod calibration;
pub mod sequence;
pub mod sweep;

pub use action::{Action, LogLine};
pub use calibration::{CalibrationStep, CALIBRATION_SCRIPT};
pub use sequence::{Phase, TestProgram};
pub use sweep::{Sweep, SweepCycle, SweepDirection};
