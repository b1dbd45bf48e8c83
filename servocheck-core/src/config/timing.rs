//! Test sequence timing

/// Delay after opening the serial link before the first line (ms)
pub const BOOT_SETTLE_MS: u32 = 1000;

/// Hold time after each calibration move (ms)
pub const CALIBRATION_SETTLE_MS: u32 = 2000;

/// Hold time after each sweep step (ms)
pub const SWEEP_STEP_DELAY_MS: u32 = 100;

/// Sweep increment (degrees)
pub const SWEEP_STEP_DEG: u8 = 5;

/// Timing parameters for the test program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TestTiming {
    /// Wait before the first log line (ms)
    pub boot_settle_ms: u32,
    /// Wait after each calibration command (ms)
    pub calibration_settle_ms: u32,
    /// Wait after each sweep command (ms)
    pub sweep_step_delay_ms: u32,
    /// Degrees per sweep step
    pub sweep_step_deg: u8,
}

impl TestTiming {
    /// The fixed smoke-test timing
    pub const DEFAULT: Self = Self {
        boot_settle_ms: BOOT_SETTLE_MS,
        calibration_settle_ms: CALIBRATION_SETTLE_MS,
        sweep_step_delay_ms: SWEEP_STEP_DELAY_MS,
        sweep_step_deg: SWEEP_STEP_DEG,
    };
}

impl Default for TestTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
