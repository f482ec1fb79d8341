//! The three-channel color mix shared by the hidden and the guessed state.

use palette::Srgb;

/// One of the three color channels, in sampling and menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, in order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns the channel after this one, or `None` after `Blue`.
    pub fn next(self) -> Option<Channel> {
        match self {
            Channel::Red => Some(Channel::Green),
            Channel::Green => Some(Channel::Blue),
            Channel::Blue => None,
        }
    }

    /// Zero-based position of the channel (`Red` is 0).
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Single-letter tag used by the reveal hint.
    pub fn letter(self) -> char {
        match self {
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
        }
    }

    /// Menu label on the test screen.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// Which channels are present in a mix.
///
/// Equality is component-wise, so two mixes match exactly when every channel
/// agrees. An all-false mix is valid: the LEDs simply stay dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorMix {
    pub has_red: bool,
    pub has_green: bool,
    pub has_blue: bool,
}

impl ColorMix {
    /// The dark mix, with no channel present.
    pub const NONE: ColorMix = ColorMix::new(false, false, false);

    /// Creates a mix from the three channel flags.
    pub const fn new(has_red: bool, has_green: bool, has_blue: bool) -> Self {
        Self {
            has_red,
            has_green,
            has_blue,
        }
    }

    /// Returns whether `channel` is present.
    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::Red => self.has_red,
            Channel::Green => self.has_green,
            Channel::Blue => self.has_blue,
        }
    }

    /// Sets the flag for `channel`.
    pub fn set(&mut self, channel: Channel, present: bool) {
        match channel {
            Channel::Red => self.has_red = present,
            Channel::Green => self.has_green = present,
            Channel::Blue => self.has_blue = present,
        }
    }

    /// Iterates over the channels present in this mix, in channel order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(move |&ch| self.get(ch))
    }

    /// Full-intensity color for this mix, as an `Srgb` in the 0.0-1.0 range.
    pub fn to_srgb(&self) -> Srgb {
        let level = |on: bool| if on { 1.0 } else { 0.0 };
        Srgb::new(level(self.has_red), level(self.has_green), level(self.has_blue))
    }
}

/// Returns true if the guessed mix equals the actual mix on every channel.
#[inline]
pub fn matches(guessed: &ColorMix, actual: &ColorMix) -> bool {
    guessed == actual
}
