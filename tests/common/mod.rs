//! Shared test infrastructure for rgb-guess integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use heapless::{Deque, String, Vec};
use palette::Srgb;
use rgb_guess::{
    AnalogSampler, Buttons, Channel, ColorMix, Display, IndicatorLeds, Peripherals,
    ScreenController, SoftwareTimer, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Display
// ============================================================================

pub const ROWS: usize = 8;
pub const COLS: usize = 20;

/// Mock display that keeps a character grid and counts clears
pub struct MockDisplay {
    grid: [[char; COLS]; ROWS],
    clears: usize,
    last_background: Option<Srgb>,
    char_writes: Vec<(u8, u8, char), 64>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[' '; COLS]; ROWS],
            clears: 0,
            last_background: None,
            char_writes: Vec::new(),
        }
    }

    /// Text on `row` with trailing blanks removed
    pub fn row_text(&self, row: u8) -> String<COLS> {
        let mut text: String<COLS> = String::new();
        for &ch in self.grid[row as usize].iter() {
            let _ = text.push(ch);
        }
        let trimmed_len = text.trim_end().len();
        text.truncate(trimmed_len);
        text
    }

    pub fn char_at(&self, row: u8, col: u8) -> char {
        self.grid[row as usize][col as usize]
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn last_background(&self) -> Option<Srgb> {
        self.last_background
    }

    /// Single-character draws since the last clear
    pub fn char_writes(&self) -> &[(u8, u8, char)] {
        &self.char_writes
    }
}

impl Display for MockDisplay {
    fn clear(&mut self, background: Srgb) {
        self.grid = [[' '; COLS]; ROWS];
        self.clears += 1;
        self.last_background = Some(background);
        self.char_writes.clear();
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            let c = col as usize + offset;
            if c < COLS {
                self.grid[row as usize][c] = ch;
            }
        }
    }

    fn draw_char(&mut self, row: u8, col: u8, ch: char) {
        self.grid[row as usize][col as usize] = ch;
        let _ = self.char_writes.push((row, col, ch));
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Latched edges: a press is reported by the next read, then cleared
pub struct MockButtons {
    top: bool,
    bottom: bool,
}

impl MockButtons {
    pub fn new() -> Self {
        Self {
            top: false,
            bottom: false,
        }
    }

    pub fn press_top(&mut self) {
        self.top = true;
    }

    pub fn press_bottom(&mut self) {
        self.bottom = true;
    }

    pub fn press_both(&mut self) {
        self.top = true;
        self.bottom = true;
    }
}

impl Buttons for MockButtons {
    fn top_pressed(&mut self) -> bool {
        core::mem::take(&mut self.top)
    }

    fn bottom_pressed(&mut self) -> bool {
        core::mem::take(&mut self.bottom)
    }
}

// ============================================================================
// Mock LEDs
// ============================================================================

/// Mock indicator LEDs that record every channel write
pub struct MockLeds {
    lit: [bool; 3],
    history: Vec<(Channel, bool), 64>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            lit: [false; 3],
            history: Vec::new(),
        }
    }

    pub fn lit(&self) -> ColorMix {
        ColorMix::new(self.lit[0], self.lit[1], self.lit[2])
    }

    pub fn history(&self) -> &[(Channel, bool)] {
        &self.history
    }
}

impl IndicatorLeds for MockLeds {
    fn set_channel(&mut self, channel: Channel, on: bool) {
        self.lit[channel.index()] = on;
        let _ = self.history.push((channel, on));
    }
}

// ============================================================================
// Mock Sampler
// ============================================================================

/// Mock sampler replaying queued sample pairs, then (0, 0)
pub struct MockSampler {
    queue: Deque<(u32, u32), 32>,
    reads: usize,
}

impl MockSampler {
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
            reads: 0,
        }
    }

    /// Queues samples whose parity bits are `bits`, in order
    pub fn with_bits(bits: &[bool]) -> Self {
        let mut sampler = Self::new();
        sampler.queue_bits(bits);
        sampler
    }

    pub fn queue_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            // odd X with even Y gives a set bit
            let pair = if bit { (2047, 1024) } else { (2047, 1023) };
            let _ = self.queue.push_back(pair);
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogSampler for MockSampler {
    fn sample(&mut self) -> (u32, u32) {
        self.reads += 1;
        self.queue.pop_front().unwrap_or((0, 0))
    }
}

// ============================================================================
// Assemblies
// ============================================================================

pub type TestHw = Peripherals<MockDisplay, MockButtons, MockLeds, MockSampler>;

pub type TestGame<'t> = ScreenController<
    MockDisplay,
    MockButtons,
    MockLeds,
    MockSampler,
    SoftwareTimer<'t, TestInstant, MockTimeSource>,
>;

/// Mock board whose sampler will yield `bits`
pub fn hw_with_bits(bits: &[bool]) -> TestHw {
    Peripherals::new(
        MockDisplay::new(),
        MockButtons::new(),
        MockLeds::new(),
        MockSampler::with_bits(bits),
    )
}
