//! Hobby servo driver over a PWM channel
//!
//! This driver provides:
//! - Angle to pulse width mapping (544-2400 µs by default)
//! - Attach/detach: no pulses are generated until the servo is attached
//! - Works with any `embedded_hal::pwm::SetDutyCycle` channel whose period
//!   is one servo frame (20 ms)
//!
//! # Usage
//!
//! ```ignore
//! let mut servo = HobbyServo::new(pwm_channel, ServoPulseConfig::default())?;
//! servo.attach()?;             // starts pulsing at the attach pulse (center)
//! servo.set_angle(Angle::MAX)?;
//! ```
//!
//! Commands sent before attaching are remembered and applied on attach.

use embedded_hal::pwm::SetDutyCycle;
use servocheck_core::traits::ServoOutput;
use servocheck_core::Angle;

/// Pulse timing for a hobby servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoPulseConfig {
    /// Pulse width at 0° (µs)
    pub min_pulse_us: u16,
    /// Pulse width at 180° (µs)
    pub max_pulse_us: u16,
    /// PWM period (µs)
    pub frame_us: u16,
    /// Pulse width used when attaching without a prior command (µs)
    pub attach_pulse_us: u16,
}

impl Default for ServoPulseConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 544,
            max_pulse_us: 2400,
            frame_us: 20_000,
            attach_pulse_us: 1500,
        }
    }
}

impl ServoPulseConfig {
    /// Check that every pulse fits in the frame
    pub fn is_valid(&self) -> bool {
        self.frame_us > 0
            && self.min_pulse_us <= self.frame_us
            && self.max_pulse_us <= self.frame_us
            && self.attach_pulse_us <= self.frame_us
            && self.min_pulse_us != self.max_pulse_us
    }

    /// Pulse width for an angle (µs)
    pub fn pulse_for(&self, angle: Angle) -> u16 {
        angle.map_to_range(self.min_pulse_us, self.max_pulse_us)
    }
}

/// Errors from the servo driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError<E> {
    /// Pulse widths do not fit the frame
    InvalidPulseConfig,
    /// The PWM channel rejected the duty cycle
    Pwm(E),
}

/// Hobby servo on a PWM channel
pub struct HobbyServo<P> {
    pwm: P,
    config: ServoPulseConfig,
    attached: bool,
    /// Last requested angle
    angle: Option<Angle>,
    /// Pulse currently on the pin (µs), if attached
    pulse_us: Option<u16>,
}

impl<P: SetDutyCycle> HobbyServo<P> {
    /// Create a detached servo
    ///
    /// The PWM output is forced fully off so the servo receives no pulses.
    pub fn new(mut pwm: P, config: ServoPulseConfig) -> Result<Self, ServoError<P::Error>> {
        if !config.is_valid() {
            return Err(ServoError::InvalidPulseConfig);
        }
        pwm.set_duty_cycle_fully_off().map_err(ServoError::Pwm)?;

        Ok(Self {
            pwm,
            config,
            attached: false,
            angle: None,
            pulse_us: None,
        })
    }

    /// Get the pulse configuration
    pub fn config(&self) -> &ServoPulseConfig {
        &self.config
    }

    /// Pulse width currently generated (µs), `None` while detached
    pub fn pulse_us(&self) -> Option<u16> {
        self.pulse_us
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }

    fn write_pulse(&mut self, pulse_us: u16) -> Result<(), ServoError<P::Error>> {
        self.pwm
            .set_duty_cycle_fraction(pulse_us, self.config.frame_us)
            .map_err(ServoError::Pwm)?;
        self.pulse_us = Some(pulse_us);
        Ok(())
    }
}

impl<P: SetDutyCycle> ServoOutput for HobbyServo<P> {
    type Error = ServoError<P::Error>;

    fn attach(&mut self) -> Result<(), Self::Error> {
        let pulse = match self.angle {
            Some(angle) => self.config.pulse_for(angle),
            None => self.config.attach_pulse_us,
        };
        self.write_pulse(pulse)?;
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle_fully_off().map_err(ServoError::Pwm)?;
        self.attached = false;
        self.pulse_us = None;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_angle(&mut self, angle: Angle) -> Result<(), Self::Error> {
        self.angle = Some(angle);
        if self.attached {
            self.write_pulse(self.config.pulse_for(angle))
        } else {
            Ok(())
        }
    }

    fn angle(&self) -> Option<Angle> {
        self.angle
    }
}
