//! Servo output trait
//!
//! Abstracts the "set angle" capability. Implementations turn an [`Angle`]
//! into whatever control signal the actuator needs; the controller never
//! sees pulse widths or timer registers.

use crate::angle::Angle;

/// An open-loop positional servo bound to one output pin
pub trait ServoOutput {
    /// Error type for output operations
    type Error;

    /// Start driving the output pin
    ///
    /// Before attaching, the pin produces no control pulses and the servo
    /// is free to move.
    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Stop driving the output pin
    fn detach(&mut self) -> Result<(), Self::Error>;

    /// Check whether the output is producing control pulses
    fn is_attached(&self) -> bool;

    /// Command an absolute position
    ///
    /// Returns immediately; the mechanism needs time to physically reach
    /// the position.
    fn set_angle(&mut self, angle: Angle) -> Result<(), Self::Error>;

    /// Last commanded position, if any
    fn angle(&self) -> Option<Angle>;
}

impl<T: ServoOutput + ?Sized> ServoOutput for &mut T {
    type Error = T::Error;

    fn attach(&mut self) -> Result<(), Self::Error> {
        T::attach(self)
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        T::detach(self)
    }

    fn is_attached(&self) -> bool {
        T::is_attached(self)
    }

    fn set_angle(&mut self, angle: Angle) -> Result<(), Self::Error> {
        T::set_angle(self, angle)
    }

    fn angle(&self) -> Option<Angle> {
        T::angle(self)
    }
}
