//! Servocheck - Servo Smoke-Test Firmware
//!
//! Main firmware binary for RP2040 boards. Centers the servo, visits both
//! end stops, then sweeps it end to end forever while logging each
//! position on UART0 at 115200 baud.
//!
//! Diagnostic output goes to defmt over RTT; the serial log carries only
//! the test transcript.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::UartTx;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use servocheck_core::config::{TestTiming, SERIAL_BAUDRATE};
use servocheck_core::ServoTestController;
use servocheck_drivers::log::SerialLog;
use servocheck_drivers::servo::{HobbyServo, ServoPulseConfig};
use servocheck_hal::UartConfig;
use servocheck_hal_rp2040::pins::PwmChannel;
use servocheck_hal_rp2040::pwm::{servo_config, ServoPwm, SERVO_FRAME_US};
use servocheck_hal_rp2040::uart::{to_rp_config, RpUartTx};

mod board;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Servocheck firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART0 for the serial log (TX only)
    let uart_config = match to_rp_config(&UartConfig::with_baudrate(SERIAL_BAUDRATE)) {
        Ok(config) => config,
        Err(e) => {
            warn!("Unsupported UART config ({}), using defaults", Debug2Format(&e));
            embassy_rp::uart::Config::default()
        }
    };
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let log = SerialLog::new(RpUartTx::new(tx));

    info!(
        "UART0 initialized at {} baud on GPIO{}",
        SERIAL_BAUDRATE,
        board::LOG_TX_GPIO
    );

    // Setup PWM slice 0 for the servo signal
    // The output stays low until the controller attaches the servo
    let pwm_config = servo_config(clk_sys_freq(), SERVO_FRAME_US);
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone());
    let Some(servo_pwm) = ServoPwm::new(pwm, PwmChannel::A, &pwm_config) else {
        defmt::panic!("PWM slice 0 has no channel A output");
    };
    let pulse_config = ServoPulseConfig::default();
    let Ok(servo) = HobbyServo::new(servo_pwm, pulse_config) else {
        defmt::panic!("Servo pulse configuration does not fit the PWM frame");
    };

    info!(
        "Servo PWM initialized on GPIO{} ({}-{}us pulses)",
        board::SERVO_GPIO,
        pulse_config.min_pulse_us,
        pulse_config.max_pulse_us
    );

    let controller = ServoTestController::new(servo, log, TestTiming::default());

    // Spawn the test task
    spawner.spawn(unwrap!(tasks::servo_test_task(controller)));

    info!("Servo test task spawned, firmware running");

    // Main task has nothing else to do
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
