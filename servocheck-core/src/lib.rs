//! Board-agnostic core logic for the servo smoke-test firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - The validated [`Angle`] type
//! - Compile-time timing constants
//! - The servo output trait
//! - The calibration script and sweep iterators
//! - The test program (an endless stream of actions)
//! - The controller that executes the program against abstract outputs

#![no_std]
#![deny(unsafe_code)]

pub mod angle;
pub mod config;
pub mod controller;
pub mod program;
pub mod traits;

pub use angle::{Angle, AngleError};
pub use controller::{ControllerStats, ServoTestController};
