//! GPIO to peripheral mapping
//!
//! RP2040 routes each GPIO to a fixed PWM slice/channel and, for some pins,
//! to one of the two UARTs. These maps let board definitions document and
//! check their pin choices.

/// Number of user GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// PWM channel within a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    /// Channel A (even GPIO numbers)
    A,
    /// Channel B (odd GPIO numbers)
    B,
}

/// PWM slice and channel driven by a GPIO
///
/// GPIO n belongs to slice (n / 2) % 8, channel A for even n, B for odd n.
pub const fn gpio_to_pwm(gpio: u8) -> Option<(u8, PwmChannel)> {
    if gpio >= GPIO_COUNT {
        return None;
    }
    let slice = (gpio / 2) % 8;
    let channel = if gpio % 2 == 0 {
        PwmChannel::A
    } else {
        PwmChannel::B
    };
    Some((slice, channel))
}

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// UART that can transmit on a given GPIO
pub const fn gpio_to_uart_tx(gpio: u8) -> Option<UartId> {
    // UART0 TX: GPIO 0, 12, 16, 28
    // UART1 TX: GPIO 4, 8, 20, 24
    match gpio {
        0 | 12 | 16 | 28 => Some(UartId::Uart0),
        4 | 8 | 20 | 24 => Some(UartId::Uart1),
        _ => None,
    }
}
