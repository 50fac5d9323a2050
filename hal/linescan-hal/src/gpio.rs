//! GPIO pin abstractions
//!
//! The sensor protocol is timed by the pin writes themselves, so outputs are
//! infallible and must take effect immediately.

use core::convert::Infallible;

/// Digital output pin
///
/// Implementations drive the hardware register directly; no buffering.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }
}

/// Adapter for an infallible `embedded-hal` 1.0 output pin
///
/// Only pins whose writes cannot fail are accepted (embassy-rp GPIO among
/// them). The last commanded level is tracked locally.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self {
            pin,
            high: initial_high,
        };
        out.set_state(initial_high);
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
