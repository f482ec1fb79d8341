//! The guess menu: marker navigation and channel selection.
//!
//! [`guess`] holds no state of its own. The marker position and the guessed
//! mix belong to the caller and are updated in place.

use crate::display::{BLANK, CHOSEN, CHOSEN_COL, Display, MARKER, MARKER_COL};
use crate::input::{Buttons, MOVE_BUTTON, SELECT_BUTTON};
use crate::mix::{Channel, ColorMix};

const FIRST_ROW: u8 = 1;
const END_ROW: u8 = 4;

/// What a menu row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    Channel(Channel),
    End,
}

/// Highlighted menu row, always one of Red, Green, Blue or End.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuPosition(u8);

impl MenuPosition {
    /// The first selectable row (Red).
    pub const FIRST: MenuPosition = MenuPosition(FIRST_ROW);

    /// The End row.
    pub const END: MenuPosition = MenuPosition(END_ROW);

    /// Returns the position for a display row, or `None` outside the menu.
    pub fn from_row(row: u8) -> Option<Self> {
        (FIRST_ROW..=END_ROW).contains(&row).then_some(MenuPosition(row))
    }

    /// Display row of this position.
    pub fn row(self) -> u8 {
        self.0
    }

    /// The next row down, wrapping from End back to the first row.
    pub fn next(self) -> Self {
        if self.0 >= END_ROW {
            Self::FIRST
        } else {
            MenuPosition(self.0 + 1)
        }
    }

    pub fn choice(self) -> MenuChoice {
        match self.0 - FIRST_ROW {
            0 => MenuChoice::Channel(Channel::Red),
            1 => MenuChoice::Channel(Channel::Green),
            2 => MenuChoice::Channel(Channel::Blue),
            _ => MenuChoice::End,
        }
    }
}

impl Default for MenuPosition {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Runs one poll of the guess menu.
///
/// A move edge erases the marker, advances `position` and redraws it. A
/// select edge stars the highlighted row and either records its channel in
/// `guessed` or, on the End row, finishes the test. When both edges arrive
/// in the same poll the move is applied first.
///
/// Returns true once End has been selected.
pub fn guess<D: Display, B: Buttons>(
    position: &mut MenuPosition,
    guessed: &mut ColorMix,
    display: &mut D,
    buttons: &mut B,
) -> bool {
    let mut finished = false;

    if buttons.pressed(MOVE_BUTTON) {
        display.draw_char(position.row(), MARKER_COL, BLANK);
        *position = position.next();
        display.draw_char(position.row(), MARKER_COL, MARKER);
        debug!("menu marker -> row {}", position.row());
    }

    if buttons.pressed(SELECT_BUTTON) {
        display.draw_char(position.row(), CHOSEN_COL, CHOSEN);
        match position.choice() {
            MenuChoice::Channel(channel) => {
                guessed.set(channel, true);
                debug!("guessed {}", channel);
            }
            MenuChoice::End => finished = true,
        }
    }

    finished
}
