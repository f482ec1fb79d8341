//! Bundle of the hardware collaborators the game drives every tick.

use crate::display::Display;
use crate::entropy::AnalogSampler;
use crate::input::Buttons;
use crate::leds::IndicatorLeds;

/// The display, buttons, indicator LEDs and entropy sampler of one board.
///
/// The timer is kept separately because only the screen controller uses it.
pub struct Peripherals<D, B, L, S> {
    pub display: D,
    pub buttons: B,
    pub leds: L,
    pub sampler: S,
}

impl<D, B, L, S> Peripherals<D, B, L, S>
where
    D: Display,
    B: Buttons,
    L: IndicatorLeds,
    S: AnalogSampler,
{
    pub fn new(display: D, buttons: B, leds: L, sampler: S) -> Self {
        Self {
            display,
            buttons,
            leds,
            sampler,
        }
    }
}
