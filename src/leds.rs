//! Indicator LED collaborators.
//!
//! The game lights up to three indicators, one per [`Channel`]. Boards with
//! three discrete LEDs implement [`IndicatorLeds`] directly. Boards with a
//! single RGB LED implement [`RgbLed`] and wrap it in [`RgbIndicator`].

use crate::mix::{Channel, ColorMix};
use palette::Srgb;

/// Per-channel on/off control of the indicator lights.
pub trait IndicatorLeds {
    /// Turns the indicator for `channel` on or off.
    fn set_channel(&mut self, channel: Channel, on: bool);

    /// Turns every indicator off.
    fn all_off(&mut self) {
        for channel in Channel::ALL {
            self.set_channel(channel, false);
        }
    }
}

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.). Color
/// components are in the range 0.0-1.0. Handle any hardware errors
/// internally - this method cannot fail.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Drives a single RGB LED as three independent channel indicators.
///
/// Keeps the current [`ColorMix`] and pushes the matching full-intensity
/// color to the LED whenever a channel changes.
pub struct RgbIndicator<L: RgbLed> {
    led: L,
    lit: ColorMix,
}

impl<L: RgbLed> RgbIndicator<L> {
    /// Wraps `led` and turns it off.
    pub fn new(mut led: L) -> Self {
        led.set_color(ColorMix::NONE.to_srgb());
        Self {
            led,
            lit: ColorMix::NONE,
        }
    }

    /// Channels currently lit.
    pub fn lit(&self) -> ColorMix {
        self.lit
    }

    /// Releases the wrapped LED.
    pub fn into_inner(self) -> L {
        self.led
    }
}

impl<L: RgbLed> IndicatorLeds for RgbIndicator<L> {
    fn set_channel(&mut self, channel: Channel, on: bool) {
        if self.lit.get(channel) == on {
            return;
        }
        self.lit.set(channel, on);
        self.led.set_color(self.lit.to_srgb());
    }
}
