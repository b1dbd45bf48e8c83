//! Servo driver implementations
//!
//! - Hobby servos: 50 Hz PWM with a pulse width proportional to the angle

pub mod hobby;

pub use hobby::{HobbyServo, ServoError, ServoPulseConfig};
