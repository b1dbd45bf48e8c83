//! RP2040-specific HAL for the servo smoke-test firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `servocheck-hal` traits, plus RP2040-specific functionality:
//!
//! - Servo-rate PWM channels (implements `embedded_hal::pwm::SetDutyCycle`)
//! - Blocking UART transmitter (implements `servocheck_hal::UartTx`)
//! - GPIO to PWM slice / UART peripheral maps

#![no_std]

pub mod pins;
pub mod pwm;
pub mod uart;
