//! Game configuration.

use crate::input::ButtonId;
use palette::Srgb;

/// How long the opening screen stays up.
pub const OPENING_WAIT_MS: u64 = 1000;

/// How long the result screen stays up.
pub const RESULT_WAIT_MS: u64 = 2000;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Opening screen wait of zero milliseconds.
    ZeroOpeningWait,

    /// Result screen wait of zero milliseconds.
    ZeroResultWait,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroOpeningWait => {
                write!(f, "opening screen wait must be non-zero")
            }
            ConfigError::ZeroResultWait => {
                write!(f, "result screen wait must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Timing, appearance and input settings for a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Opening screen duration in milliseconds.
    pub opening_wait_ms: u64,

    /// Result screen duration in milliseconds. Longer than the opening wait
    /// by default so the verdict can be read.
    pub result_wait_ms: u64,

    /// Screen background passed to [`Display::clear`](crate::display::Display::clear).
    pub background: Srgb,

    /// Button that leaves the instructions screen and starts a test.
    pub start_button: ButtonId,

    /// Print the hidden mix on the test screen. Handy when bringing up a
    /// board whose LEDs might be miswired.
    pub reveal_mix: bool,
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening_wait_ms: OPENING_WAIT_MS,
            result_wait_ms: RESULT_WAIT_MS,
            background: Srgb::new(0.0, 0.0, 0.0),
            start_button: ButtonId::Bottom,
            reveal_mix: false,
        }
    }
}

/// Builder for [`GameConfig`], starting from the defaults.
#[derive(Debug, Clone, Copy)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    pub fn opening_wait_ms(mut self, millis: u64) -> Self {
        self.config.opening_wait_ms = millis;
        self
    }

    pub fn result_wait_ms(mut self, millis: u64) -> Self {
        self.config.result_wait_ms = millis;
        self
    }

    pub fn background(mut self, color: Srgb) -> Self {
        self.config.background = color;
        self
    }

    pub fn start_button(mut self, button: ButtonId) -> Self {
        self.config.start_button = button;
        self
    }

    pub fn reveal_mix(mut self, reveal: bool) -> Self {
        self.config.reveal_mix = reveal;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// * `ZeroOpeningWait` - opening wait is zero
    /// * `ZeroResultWait` - result wait is zero
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if self.config.opening_wait_ms == 0 {
            return Err(ConfigError::ZeroOpeningWait);
        }
        if self.config.result_wait_ms == 0 {
            return Err(ConfigError::ZeroResultWait);
        }
        Ok(self.config)
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
