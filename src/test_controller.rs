//! The test state machine: generate a hidden mix, light it, collect a guess.
//!
//! [`TestController`] is the explicit context that survives between polls.
//! Every poll does a bounded amount of work so the cooperative scheduler
//! never stalls: generation takes one channel per poll, lighting takes one
//! poll, and guessing runs the menu once per poll.

use crate::display::{self, Display};
use crate::entropy::{AnalogSampler, RandomBitSource};
use crate::input::Buttons;
use crate::leds::IndicatorLeds;
use crate::menu::{self, MenuPosition};
use crate::mix::{self, Channel, ColorMix};
use crate::peripherals::Peripherals;

/// Phase of a single test. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestPhase {
    /// Sampling one random bit per poll, Red then Green then Blue.
    Setup,
    /// Turning on the indicators of the hidden mix.
    LightUp,
    /// Running the guess menu until End is selected.
    Testing,
}

/// Outcome of one [`TestController::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestStatus {
    /// The test is still generating, lighting up, or waiting for End.
    InProgress,
    /// The user selected End. `correct` is true if the guess matched.
    Finished { correct: bool },
}

impl TestStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, TestStatus::Finished { .. })
    }

    /// The match result, only present once finished.
    pub fn result(&self) -> Option<bool> {
        match self {
            TestStatus::Finished { correct } => Some(*correct),
            TestStatus::InProgress => None,
        }
    }
}

/// State carried across polls of one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestController {
    phase: TestPhase,
    cursor: Channel,
    actual: ColorMix,
    guessed: ColorMix,
    position: MenuPosition,
    reveal_mix: bool,
}

impl TestController {
    /// Creates a controller in the reset state.
    pub fn new(reveal_mix: bool) -> Self {
        Self {
            phase: TestPhase::Setup,
            cursor: Channel::Red,
            actual: ColorMix::NONE,
            guessed: ColorMix::NONE,
            position: MenuPosition::FIRST,
            reveal_mix,
        }
    }

    /// Clears both mixes and the menu position, rewinds to [`TestPhase::Setup`]
    /// and turns every indicator off.
    pub fn reset<L: IndicatorLeds>(&mut self, leds: &mut L) {
        self.phase = TestPhase::Setup;
        self.cursor = Channel::Red;
        self.actual = ColorMix::NONE;
        self.guessed = ColorMix::NONE;
        self.position = MenuPosition::FIRST;
        leds.all_off();
    }

    /// Advances the test by one step.
    ///
    /// `new_test` resets the controller first, then the poll continues with
    /// the first Setup step. Button edges pending before the guess menu opens
    /// are dropped, so only presses made while guessing reach the menu. Once
    /// finished, further polls re-run the menu and stay in
    /// [`TestPhase::Testing`] until the next `new_test`.
    pub fn poll<D, B, L, S>(&mut self, new_test: bool, hw: &mut Peripherals<D, B, L, S>) -> TestStatus
    where
        D: Display,
        B: Buttons,
        L: IndicatorLeds,
        S: AnalogSampler,
    {
        if new_test {
            self.reset(&mut hw.leds);
            debug!("new test");
        }

        match self.phase {
            TestPhase::Setup => {
                hw.buttons.discard_pending();
                let bit = RandomBitSource::sample_bit(&mut hw.sampler);
                self.actual.set(self.cursor, bit);
                match self.cursor.next() {
                    Some(next) => self.cursor = next,
                    None => self.enter(TestPhase::LightUp),
                }
                TestStatus::InProgress
            }
            TestPhase::LightUp => {
                hw.buttons.discard_pending();
                for channel in self.actual.channels() {
                    hw.leds.set_channel(channel, true);
                }
                if self.reveal_mix {
                    display::draw_mix_hint(&mut hw.display, &self.actual);
                }
                self.enter(TestPhase::Testing);
                TestStatus::InProgress
            }
            TestPhase::Testing => {
                let done = menu::guess(&mut self.position, &mut self.guessed, &mut hw.display, &mut hw.buttons);
                if done {
                    let correct = mix::matches(&self.guessed, &self.actual);
                    info!("test finished, correct={}", correct);
                    TestStatus::Finished { correct }
                } else {
                    TestStatus::InProgress
                }
            }
        }
    }

    fn enter(&mut self, phase: TestPhase) {
        debug!("test phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    pub fn phase(&self) -> TestPhase {
        self.phase
    }

    /// The hidden mix generated so far.
    pub fn actual(&self) -> ColorMix {
        self.actual
    }

    /// The user's guess so far.
    pub fn guessed(&self) -> ColorMix {
        self.guessed
    }

    pub fn position(&self) -> MenuPosition {
        self.position
    }
}

impl Default for TestController {
    fn default() -> Self {
        Self::new(false)
    }
}
