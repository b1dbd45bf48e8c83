//! Board pin assignments
//!
//! Raspberry Pi Pico wiring for the smoke test. The constants document the
//! pins taken from `Peripherals` in `main`; the assertions keep them in
//! step with the peripherals they are routed to.

use servocheck_hal_rp2040::pins::{gpio_to_pwm, gpio_to_uart_tx, PwmChannel, UartId};

/// Serial log TX (UART0)
pub const LOG_TX_GPIO: u8 = 0;

/// Servo signal (PWM slice 0, channel A)
pub const SERVO_GPIO: u8 = 16;

const _: () = assert!(matches!(gpio_to_uart_tx(LOG_TX_GPIO), Some(UartId::Uart0)));
const _: () = assert!(matches!(gpio_to_pwm(SERVO_GPIO), Some((0, PwmChannel::A))));
