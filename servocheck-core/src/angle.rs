//! Servo angle type
//!
//! A hobby servo accepts absolute positions between 0 and 180 degrees.
//! [`Angle`] can only hold values inside that range, so every command the
//! controller issues is valid by construction.

use core::fmt;

/// Commanded servo position in whole degrees (0-180)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u8);

/// Errors when constructing an [`Angle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngleError {
    /// Value is above 180 degrees
    OutOfRange(u16),
}

impl Angle {
    /// Fully counter-clockwise (0°)
    pub const MIN: Angle = Angle(0);
    /// Mid travel (90°)
    pub const CENTER: Angle = Angle(90);
    /// Fully clockwise (180°)
    pub const MAX: Angle = Angle(180);

    /// Create an angle, rejecting values above 180
    pub const fn new(degrees: u16) -> Result<Self, AngleError> {
        if degrees > Self::MAX.0 as u16 {
            Err(AngleError::OutOfRange(degrees))
        } else {
            Ok(Angle(degrees as u8))
        }
    }

    /// Angle in degrees
    pub const fn degrees(self) -> u8 {
        self.0
    }

    /// Step up by `step` degrees, or `None` past 180
    pub fn checked_add(self, step: u8) -> Option<Self> {
        let next = self.0.checked_add(step)?;
        Self::new(next as u16).ok()
    }

    /// Step down by `step` degrees, or `None` below 0
    pub fn checked_sub(self, step: u8) -> Option<Self> {
        self.0.checked_sub(step).map(Angle)
    }

    /// Linearly map this angle onto `[min, max]`
    ///
    /// Used to turn an angle into a pulse width. `max` may be below `min`
    /// for servos mounted in reverse.
    pub fn map_to_range(self, min: u16, max: u16) -> u16 {
        let span = max as i32 - min as i32;
        let offset = span * self.0 as i32 / Self::MAX.0 as i32;
        (min as i32 + offset) as u16
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<u16> for Angle {
    type Error = AngleError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Angle> for u8 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(Angle::MIN.degrees(), 0);
        assert_eq!(Angle::CENTER.degrees(), 90);
        assert_eq!(Angle::MAX.degrees(), 180);
        assert_eq!(Angle::default(), Angle::CENTER);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Angle::new(181), Err(AngleError::OutOfRange(181)));
        assert_eq!(Angle::try_from(500u16), Err(AngleError::OutOfRange(500)));
    }

    #[test]
    fn test_stepping_stops_at_bounds() {
        assert_eq!(Angle::MAX.checked_add(5), None);
        assert_eq!(Angle::MIN.checked_sub(5), None);
        assert_eq!(Angle::new(175).unwrap().checked_add(5), Some(Angle::MAX));
        assert_eq!(Angle::new(5).unwrap().checked_sub(5), Some(Angle::MIN));
        assert_eq!(Angle::new(178).unwrap().checked_add(5), None);
    }

    #[test]
    fn test_map_to_pulse_range() {
        assert_eq!(Angle::MIN.map_to_range(544, 2400), 544);
        assert_eq!(Angle::CENTER.map_to_range(544, 2400), 1472);
        assert_eq!(Angle::MAX.map_to_range(544, 2400), 2400);
        // Reversed mounting
        assert_eq!(Angle::MIN.map_to_range(2400, 544), 2400);
        assert_eq!(Angle::MAX.map_to_range(2400, 544), 544);
    }

    proptest! {
        #[test]
        fn new_accepts_exactly_the_servo_range(degrees in 0u16..1000) {
            let result = Angle::new(degrees);
            prop_assert_eq!(result.is_ok(), degrees <= 180);
            if let Ok(angle) = result {
                prop_assert_eq!(angle.degrees() as u16, degrees);
            }
        }

        #[test]
        fn mapping_is_monotonic(a in 0u16..=180, b in 0u16..=180) {
            let (a, b) = (Angle::new(a).unwrap(), Angle::new(b).unwrap());
            if a <= b {
                prop_assert!(a.map_to_range(544, 2400) <= b.map_to_range(544, 2400));
            }
        }

        #[test]
        fn stepping_never_leaves_range(start in 0u16..=180, step in 1u8..=180) {
            let angle = Angle::new(start).unwrap();
            if let Some(up) = angle.checked_add(step) {
                prop_assert!(up.degrees() <= 180);
                prop_assert!(up > angle);
            }
            if let Some(down) = angle.checked_sub(step) {
                prop_assert!(down < angle);
            }
        }
    }
}
