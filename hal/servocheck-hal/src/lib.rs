//! Servocheck Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that chip-specific
//! HALs implement, so the drivers and the controller logic can be built and
//! tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  servocheck-firmware                    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servocheck-drivers (SerialLog, servo)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servocheck-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!         ┌───────────────────────┐
//!         │ servocheck-hal-rp2040 │
//!         └───────────────────────┘
//! ```
//!
//! PWM output is not abstracted here: drivers use
//! `embedded_hal::pwm::SetDutyCycle` directly.
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Serial transmission for the position log

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

// Re-export key traits at crate root for convenience
pub use uart::{UartConfig, UartTx};
