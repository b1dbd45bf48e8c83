//! Hardware driver implementations
//!
//! This crate provides board-agnostic implementations of the traits defined
//! in servocheck-core:
//!
//! - Hobby servo driven by any `embedded_hal::pwm::SetDutyCycle` channel
//! - Serial line logger over a `servocheck_hal::UartTx`

#![no_std]
#![deny(unsafe_code)]

pub mod log;
pub mod servo;
