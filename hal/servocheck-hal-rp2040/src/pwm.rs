//! Servo-rate PWM on an RP2040 slice
//!
//! The slice counter is clocked at 1 MHz, so one count is one microsecond
//! and a 20 ms servo frame is 20 000 counts. Duty cycle values written
//! through `SetDutyCycle` are therefore pulse widths in microseconds when
//! `max_duty_cycle()` equals the frame length.

use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use fixed::types::U12F4;

use crate::pins::PwmChannel;

/// Counter tick rate (Hz)
pub const TICK_HZ: u32 = 1_000_000;

/// Standard servo frame (µs)
pub const SERVO_FRAME_US: u16 = 20_000;

/// Clock divider that brings `clk_hz` down to `tick_hz`
///
/// Returns the divider as 8.4 fixed point, clamped to the hardware range
/// (1.0 to 255.9375).
pub fn clock_divider(clk_hz: u32, tick_hz: u32) -> U12F4 {
    let tick_hz = tick_hz.max(1) as u64;
    // Sixteenths of the divider, rounded to nearest
    let sixteenths = (clk_hz as u64 * 16 + tick_hz / 2) / tick_hz;
    let sixteenths = sixteenths.clamp(16, 255 * 16 + 15);
    U12F4::from_bits(sixteenths as u16)
}

/// PWM configuration for a servo frame
///
/// Both compare values start at 0 so no pulses reach the servo until a
/// duty cycle is written.
pub fn servo_config(clk_hz: u32, frame_us: u16) -> Config {
    let mut cfg = Config::default();
    cfg.divider = clock_divider(clk_hz, TICK_HZ);
    // Edge-aligned so one count is exactly one tick
    cfg.phase_correct = false;
    cfg.top = frame_us.saturating_sub(1);
    cfg.compare_a = 0;
    cfg.compare_b = 0;
    cfg.enable = true;
    cfg
}

/// Duty cycle that keeps the output high for a whole frame
///
/// The counter wraps after `top`, so `top + 1` counts make one period.
pub const fn frame_counts(config: &Config) -> u16 {
    config.top.saturating_add(1)
}

/// One PWM channel of a slice configured with [`servo_config`]
///
/// Writes go straight to the channel's compare register; the slice
/// configuration is left as it was set up.
pub struct ServoPwm<'d> {
    output: PwmOutput<'d>,
    frame_counts: u16,
}

impl<'d> ServoPwm<'d> {
    /// Take one channel of a slice created with `Pwm::new_output_a`/`new_output_b`
    ///
    /// `config` must be the configuration the slice was created with.
    /// Returns `None` if the slice has no pin on `channel`.
    pub fn new(pwm: Pwm<'d>, channel: PwmChannel, config: &Config) -> Option<Self> {
        let (a, b) = pwm.split();
        let output = match channel {
            PwmChannel::A => a,
            PwmChannel::B => b,
        }?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Servo PWM: div={} top={} channel={}",
            config.divider.to_bits(),
            config.top,
            channel
        );

        Some(Self {
            output,
            frame_counts: frame_counts(config),
        })
    }
}

impl<'d> ErrorType for ServoPwm<'d> {
    type Error = <PwmOutput<'d> as ErrorType>::Error;
}

impl SetDutyCycle for ServoPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.frame_counts
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let duty = duty.min(self.output.max_duty_cycle());
        self.output.set_duty_cycle(duty)
    }
}
