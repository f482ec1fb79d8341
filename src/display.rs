//! Character display collaborator and the game's screen layouts.
//!
//! The display is addressed as a text grid of rows and columns. Menu rows
//! start at row 1, the selection marker lives in [`MARKER_COL`] and the
//! chosen marker in [`CHOSEN_COL`].

use crate::input::ButtonId;
use crate::mix::{Channel, ColorMix};
use core::fmt::Write;
use heapless::String;
use palette::Srgb;

/// Text-grid display.
///
/// Implementations map rows and columns onto their font cell size. Calls
/// must not block for longer than one frame transfer.
pub trait Display {
    /// Fills the whole screen with `background`.
    fn clear(&mut self, background: Srgb);

    /// Draws `text` starting at `row`, `col`.
    fn draw_text(&mut self, row: u8, col: u8, text: &str);

    /// Draws a single character at `row`, `col`.
    fn draw_char(&mut self, row: u8, col: u8, ch: char);
}

/// Column of the `>` selection marker.
pub const MARKER_COL: u8 = 1;

/// Column where menu labels start.
pub const LABEL_COL: u8 = 3;

/// Column of the `*` chosen marker.
pub const CHOSEN_COL: u8 = 9;

/// Row of the mix reveal hint, free on the test screen.
pub const HINT_ROW: u8 = 5;

pub const MARKER: char = '>';
pub const CHOSEN: char = '*';
pub const BLANK: char = ' ';

/// Label of the menu row that ends the test.
pub const END_LABEL: &str = "End test";

pub fn draw_opening_screen<D: Display>(display: &mut D, background: Srgb) {
    display.clear(background);
    display.draw_text(2, 2, "COLOR TEST");
    display.draw_text(3, 3, "guess");
    display.draw_text(4, 2, "the mix");
}

/// Draws the how-to-play page. `start_button` is the button that begins a test.
pub fn draw_instructions_screen<D: Display>(display: &mut D, background: Srgb, start_button: ButtonId) {
    display.clear(background);
    display.draw_text(1, 1, "Guess RGB mix.");
    display.draw_text(2, 1, "During test:");
    display.draw_text(3, 1, "BTM: move arrow");
    display.draw_text(4, 1, "TOP: select");

    let mut start: String<16> = String::new();
    // "BTM to start" is 12 chars, always fits
    let _ = write!(start, "{} to start", start_button.label());
    display.draw_text(7, 1, &start);
}

/// Draws the guess menu with the marker on the first row.
pub fn draw_test_screen<D: Display>(display: &mut D, background: Srgb) {
    display.clear(background);
    for (row, channel) in (1u8..).zip(Channel::ALL) {
        display.draw_text(row, LABEL_COL, channel.label());
    }
    display.draw_text(4, LABEL_COL, END_LABEL);

    display.draw_text(6, 1, "BTM: move arrow");
    display.draw_text(7, 1, "TOP: select");

    display.draw_char(1, MARKER_COL, MARKER);
}

pub fn draw_end_screen<D: Display>(display: &mut D, background: Srgb, correct: bool) {
    display.clear(background);
    display.draw_text(2, 3, if correct { "Right!" } else { "Wrong!" });
}

/// Formats the reveal hint for `mix`, e.g. `Mix: R-B`.
pub fn mix_hint(mix: &ColorMix) -> String<8> {
    let mut hint: String<8> = String::new();
    let _ = hint.push_str("Mix: ");
    for channel in Channel::ALL {
        let _ = hint.push(if mix.get(channel) { channel.letter() } else { '-' });
    }
    hint
}

/// Draws the reveal hint on [`HINT_ROW`].
pub fn draw_mix_hint<D: Display>(display: &mut D, mix: &ColorMix) {
    display.draw_text(HINT_ROW, 1, &mix_hint(mix));
}
