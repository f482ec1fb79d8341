//! Top-level screen state machine.
//!
//! Sequences the opening, instructions, test and result screens. Called once
//! per scheduler tick via [`ScreenController::tick`]; nothing in here waits.

use crate::config::GameConfig;
use crate::display::{self, Display};
use crate::entropy::AnalogSampler;
use crate::input::Buttons;
use crate::leds::IndicatorLeds;
use crate::peripherals::Peripherals;
use crate::test_controller::{TestController, TestStatus};
use crate::timer::OneShotTimer;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenState {
    /// Power-on. Left on the first tick and never re-entered.
    Inception,
    /// Title screen, held for the opening wait.
    Opening,
    /// How-to-play page, held until the start button is pressed.
    Instructions,
    /// A test is running.
    Test,
    /// Verdict, held for the result wait.
    TestEnd,
}

/// Screen-level game controller.
///
/// Owns the board peripherals, the one-shot timer and the test context.
///
/// # Type Parameters
/// * `D` - Display implementation
/// * `B` - Button input implementation
/// * `L` - Indicator LED implementation
/// * `S` - Analog sampler implementation
/// * `T` - One-shot timer implementation
pub struct ScreenController<D, B, L, S, T> {
    hw: Peripherals<D, B, L, S>,
    timer: T,
    config: GameConfig,
    state: ScreenState,
    new_test: bool,
    test: TestController,
}

impl<D, B, L, S, T> ScreenController<D, B, L, S, T>
where
    D: Display,
    B: Buttons,
    L: IndicatorLeds,
    S: AnalogSampler,
    T: OneShotTimer,
{
    /// Creates a controller in [`ScreenState::Inception`]. Nothing is drawn
    /// until the first tick.
    pub fn new(hw: Peripherals<D, B, L, S>, timer: T, config: GameConfig) -> Self {
        Self {
            hw,
            timer,
            config,
            state: ScreenState::Inception,
            new_test: false,
            test: TestController::new(config.reveal_mix),
        }
    }

    /// Runs one scheduler tick.
    ///
    /// Reads only the inputs the current state cares about, moves to the
    /// next state if they call for it, then performs that transition's
    /// outputs (timer restart, screen draw).
    pub fn tick(&mut self) {
        let bg = self.config.background;

        match self.state {
            ScreenState::Inception => {
                self.enter(ScreenState::Opening);
                self.start_timer(self.config.opening_wait_ms);
                display::draw_opening_screen(&mut self.hw.display, bg);
            }
            ScreenState::Opening => {
                if self.timer.expired() {
                    self.show_instructions();
                }
            }
            ScreenState::Instructions => {
                if self.hw.buttons.pressed(self.config.start_button) {
                    self.enter(ScreenState::Test);
                    self.new_test = true;
                    display::draw_test_screen(&mut self.hw.display, bg);
                }
            }
            ScreenState::Test => {
                let status = self.test.poll(self.new_test, &mut self.hw);
                self.new_test = false;
                if let TestStatus::Finished { correct } = status {
                    self.enter(ScreenState::TestEnd);
                    self.start_timer(self.config.result_wait_ms);
                    display::draw_end_screen(&mut self.hw.display, bg, correct);
                }
            }
            ScreenState::TestEnd => {
                if self.timer.expired() {
                    self.show_instructions();
                }
            }
        }
    }

    /// Ticks forever. For boards with no other work in their main loop.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Enters Instructions with no stale press queued, so a start press made
    /// on the previous screen cannot skip the page.
    fn show_instructions(&mut self) {
        self.enter(ScreenState::Instructions);
        self.hw.buttons.discard_pending();
        display::draw_instructions_screen(&mut self.hw.display, self.config.background, self.config.start_button);
    }

    fn enter(&mut self, next: ScreenState) {
        info!("screen {} -> {}", self.state, next);
        self.state = next;
    }

    fn start_timer(&mut self, duration_ms: u64) {
        self.timer.init(duration_ms);
        self.timer.start();
    }

    /// Returns the current screen.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The test context, for inspecting the hidden and guessed mixes.
    pub fn test(&self) -> &TestController {
        &self.test
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn peripherals(&self) -> &Peripherals<D, B, L, S> {
        &self.hw
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<D, B, L, S> {
        &mut self.hw
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Releases the peripherals and the timer.
    pub fn into_parts(self) -> (Peripherals<D, B, L, S>, T) {
        (self.hw, self.timer)
    }
}
