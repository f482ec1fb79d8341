#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ScreenController`**: Top-level state machine, ticked once per scheduler period
//! - **`TestController`**: Per-test context: random mix generation, LED light-up, guess collection
//! - **`guess`**: Stateless menu step driven by the move and select button edges
//! - **`ColorMix`**: Which of red, green and blue are present
//! - **`RandomBitSource`**: One coin flip per call from the parity of two analog samples
//! - **`Display`**, **`Buttons`**, **`IndicatorLeds`**, **`AnalogSampler`**, **`OneShotTimer`**:
//!   Traits to implement for your board
//! - **`GameConfig`**: Wait times, background color, start button, reveal hint
//!
//! Every poll does a bounded amount of work and returns. Waiting is only
//! ever "not yet transitioned", observed on a later tick.

// Must come first so the logging macros are visible to the modules below.
mod fmt;

pub mod config;
pub mod display;
pub mod entropy;
pub mod input;
pub mod leds;
pub mod menu;
pub mod mix;
pub mod peripherals;
pub mod screens;
pub mod test_controller;
pub mod time;
pub mod timer;

pub use config::{ConfigError, GameConfig, GameConfigBuilder};
pub use display::Display;
pub use entropy::{AnalogSampler, RandomBitSource};
pub use input::{ButtonId, Buttons, EdgeDetector};
pub use leds::{IndicatorLeds, RgbIndicator, RgbLed};
pub use menu::{MenuChoice, MenuPosition, guess};
pub use mix::{Channel, ColorMix, matches};
pub use peripherals::Peripherals;
pub use screens::{ScreenController, ScreenState};
pub use test_controller::{TestController, TestPhase, TestStatus};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use timer::{OneShotTimer, SoftwareTimer};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;
