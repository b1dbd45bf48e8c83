//! Sweep iterators
//!
//! A sweep walks the full servo range in one direction with a fixed step,
//! including both bounds. If the step does not divide 180 the sweep stops
//! at the last value still inside the range.
//!
//! ```text
//! ascending(5):   0, 5, 10, ..., 175, 180
//! descending(5):  180, 175, ..., 5, 0
//! cycle(5):       0 ... 180, 180 ... 0, 0 ... 180, ...
//! ```

use core::iter::FusedIterator;

use crate::angle::Angle;

/// Sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepDirection {
    /// 0° towards 180°
    Ascending,
    /// 180° towards 0°
    Descending,
}

impl SweepDirection {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            SweepDirection::Ascending => SweepDirection::Descending,
            SweepDirection::Descending => SweepDirection::Ascending,
        }
    }

    /// First angle of a sweep in this direction
    pub fn start(self) -> Angle {
        match self {
            SweepDirection::Ascending => Angle::MIN,
            SweepDirection::Descending => Angle::MAX,
        }
    }
}

/// One end-to-end traversal of the servo range
#[derive(Debug, Clone)]
pub struct Sweep {
    next: Option<Angle>,
    direction: SweepDirection,
    step: u8,
}

impl Sweep {
    /// Create a sweep in the given direction
    ///
    /// A step of 0 is treated as 1 so the sweep always terminates.
    pub fn new(direction: SweepDirection, step: u8) -> Self {
        Self {
            next: Some(direction.start()),
            direction,
            step: step.max(1),
        }
    }

    /// Sweep from 0° up to 180°
    pub fn ascending(step: u8) -> Self {
        Self::new(SweepDirection::Ascending, step)
    }

    /// Sweep from 180° down to 0°
    pub fn descending(step: u8) -> Self {
        Self::new(SweepDirection::Descending, step)
    }

    /// Direction of this sweep
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Step size in degrees
    pub fn step(&self) -> u8 {
        self.step
    }

    fn remaining(&self) -> usize {
        match self.next {
            None => 0,
            Some(angle) => {
                let distance = match self.direction {
                    SweepDirection::Ascending => Angle::MAX.degrees() - angle.degrees(),
                    SweepDirection::Descending => angle.degrees(),
                };
                (distance / self.step) as usize + 1
            }
        }
    }
}

impl Iterator for Sweep {
    type Item = Angle;

    fn next(&mut self) -> Option<Angle> {
        let current = self.next?;
        self.next = match self.direction {
            SweepDirection::Ascending => current.checked_add(self.step),
            SweepDirection::Descending => current.checked_sub(self.step),
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

impl FusedIterator for Sweep {}

/// Endless alternation of ascending and descending sweeps
///
/// Starts with an ascending sweep. Each sweep includes its own start
/// value, so the turn angle is issued at the end of one sweep and again at
/// the start of the next.
#[derive(Debug, Clone)]
pub struct SweepCycle {
    current: Sweep,
    completed_sweeps: u32,
}

impl SweepCycle {
    /// Create a cycle with the given step size
    pub fn new(step: u8) -> Self {
        Self {
            current: Sweep::ascending(step),
            completed_sweeps: 0,
        }
    }

    /// Produce the next angle
    pub fn next_angle(&mut self) -> Angle {
        if let Some(angle) = self.current.next() {
            return angle;
        }

        self.completed_sweeps = self.completed_sweeps.wrapping_add(1);
        self.current = Sweep::new(self.current.direction().opposite(), self.current.step());
        // A fresh sweep always yields its start angle
        self.current
            .next()
            .unwrap_or_else(|| self.current.direction().start())
    }

    /// Direction of the sweep in progress
    pub fn direction(&self) -> SweepDirection {
        self.current.direction()
    }

    /// Number of sweeps finished so far (wraps)
    pub fn completed_sweeps(&self) -> u32 {
        self.completed_sweeps
    }
}

impl Iterator for SweepCycle {
    type Item = Angle;

    fn next(&mut self) -> Option<Angle> {
        Some(self.next_angle())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for SweepCycle {}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use proptest::prelude::*;

    fn degrees<I: Iterator<Item = Angle>>(iter: I) -> Vec<u8, 256> {
        iter.map(Angle::degrees).collect()
    }

    #[test]
    fn test_ascending_sweep() {
        let values = degrees(Sweep::ascending(5));
        assert_eq!(values.len(), 37);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&180));
        for (i, value) in values.iter().enumerate() {
            assert_eq!(*value as usize, i * 5);
        }
    }

    #[test]
    fn test_descending_sweep() {
        let values = degrees(Sweep::descending(5));
        assert_eq!(values.len(), 37);
        assert_eq!(values.first(), Some(&180));
        assert_eq!(values.last(), Some(&0));
        for (i, value) in values.iter().enumerate() {
            assert_eq!(*value as usize, 180 - i * 5);
        }
    }

    #[test]
    fn test_exact_size() {
        let mut sweep = Sweep::ascending(5);
        assert_eq!(sweep.len(), 37);
        sweep.next();
        assert_eq!(sweep.len(), 36);
        assert_eq!(Sweep::descending(7).len(), degrees(Sweep::descending(7)).len());
    }

    #[test]
    fn test_uneven_step_stays_in_range() {
        let values = degrees(Sweep::ascending(7));
        assert_eq!(values.last(), Some(&175));
        let values = degrees(Sweep::descending(7));
        assert_eq!(values.last(), Some(&5));
    }

    #[test]
    fn test_zero_step_terminates() {
        assert_eq!(Sweep::ascending(0).len(), 181);
        assert_eq!(Sweep::ascending(0).step(), 1);
    }

    #[test]
    fn test_fused() {
        let mut sweep = Sweep::descending(90);
        assert_eq!(degrees(sweep.by_ref()).as_slice(), &[180, 90, 0]);
        assert_eq!(sweep.next(), None);
        assert_eq!(sweep.next(), None);
    }

    #[test]
    fn test_full_cycle_trace() {
        let trace = degrees(SweepCycle::new(5).take(74));
        assert_eq!(trace.len(), 74);
        assert_eq!(trace[0], 0);
        assert_eq!(trace[73], 0);
        assert_eq!(trace.iter().position(|&d| d == 180), Some(36));
        assert_eq!(trace[37], 180);
        // The turn repeats the endpoint once and nowhere else
        assert_eq!(trace.iter().filter(|&&d| d == 180).count(), 2);
    }

    #[test]
    fn test_cycle_alternates() {
        let mut cycle = SweepCycle::new(5);
        assert_eq!(cycle.direction(), SweepDirection::Ascending);

        for _ in 0..37 {
            cycle.next_angle();
        }
        assert_eq!(cycle.completed_sweeps(), 0);

        assert_eq!(cycle.next_angle(), Angle::MAX);
        assert_eq!(cycle.direction(), SweepDirection::Descending);
        assert_eq!(cycle.completed_sweeps(), 1);

        for _ in 0..36 {
            cycle.next_angle();
        }
        assert_eq!(cycle.next_angle(), Angle::MIN);
        assert_eq!(cycle.direction(), SweepDirection::Ascending);
        assert_eq!(cycle.completed_sweeps(), 2);
    }

    proptest! {
        #[test]
        fn sweeps_are_strictly_monotonic(step in 1u8..=180) {
            let up = degrees(Sweep::ascending(step));
            prop_assert!(up.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(up.iter().all(|&d| d <= 180));

            let down = degrees(Sweep::descending(step));
            prop_assert!(down.windows(2).all(|w| w[0] > w[1]));
            prop_assert_eq!(up.len(), down.len());
        }

        #[test]
        fn cycle_steps_never_exceed_step(step in 1u8..=90, count in 1usize..500) {
            let trace = degrees(SweepCycle::new(step).take(count.min(256)));
            for w in trace.windows(2) {
                prop_assert!(w[0].abs_diff(w[1]) <= step);
            }
        }
    }
}
