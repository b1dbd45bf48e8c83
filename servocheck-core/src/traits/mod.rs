//! Hardware abstraction traits
//!
//! These traits define the interface between the test sequencing logic
//! and hardware-specific implementations.

pub mod servo;

pub use servo::ServoOutput;
