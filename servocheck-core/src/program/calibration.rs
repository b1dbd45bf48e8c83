//! Calibration script
//!
//! Visits center, both end stops, then center again so a technician can
//! check the horn alignment and the full mechanical travel by eye.

use crate::angle::Angle;

/// One scripted calibration move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationStep {
    /// Target position
    pub angle: Angle,
    /// Log line emitted before the move
    pub description: &'static str,
}

/// The fixed calibration sequence
pub const CALIBRATION_SCRIPT: [CalibrationStep; 4] = [
    CalibrationStep {
        angle: Angle::CENTER,
        description: "Moving to 90 degrees (center)",
    },
    CalibrationStep {
        angle: Angle::MIN,
        description: "Moving to 0 degrees",
    },
    CalibrationStep {
        angle: Angle::MAX,
        description: "Moving to 180 degrees",
    },
    CalibrationStep {
        angle: Angle::CENTER,
        description: "Moving back to 90 degrees",
    },
];
