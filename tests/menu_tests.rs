//! Integration tests for the guess menu

mod common;
use common::*;

use rgb_guess::display::{CHOSEN, CHOSEN_COL, MARKER, MARKER_COL};
use rgb_guess::{ColorMix, MenuPosition, guess};

struct Menu {
    display: MockDisplay,
    buttons: MockButtons,
    position: MenuPosition,
    guessed: ColorMix,
}

impl Menu {
    fn new() -> Self {
        Self {
            display: MockDisplay::new(),
            buttons: MockButtons::new(),
            position: MenuPosition::FIRST,
            guessed: ColorMix::NONE,
        }
    }

    fn poll(&mut self) -> bool {
        guess(&mut self.position, &mut self.guessed, &mut self.display, &mut self.buttons)
    }

    fn move_marker(&mut self) -> bool {
        self.buttons.press_bottom();
        self.poll()
    }

    fn select(&mut self) -> bool {
        self.buttons.press_top();
        self.poll()
    }
}

#[test]
fn no_edges_changes_nothing() {
    let mut menu = Menu::new();
    for _ in 0..100 {
        assert!(!menu.poll());
    }
    assert_eq!(menu.position, MenuPosition::FIRST);
    assert_eq!(menu.guessed, ColorMix::NONE);
    assert!(menu.display.char_writes().is_empty());
}

#[test]
fn move_edge_advances_exactly_one_row_and_wraps() {
    let mut menu = Menu::new();
    let mut rows = [0u8; 8];
    for row in rows.iter_mut() {
        assert!(!menu.move_marker());
        *row = menu.position.row();
    }
    assert_eq!(rows, [2, 3, 4, 1, 2, 3, 4, 1]);
}

#[test]
fn move_erases_old_marker_and_draws_new_one() {
    let mut menu = Menu::new();
    menu.move_marker();

    assert_eq!(menu.display.char_at(1, MARKER_COL), ' ');
    assert_eq!(menu.display.char_at(2, MARKER_COL), MARKER);
    assert_eq!(
        menu.display.char_writes(),
        &[(1, MARKER_COL, ' '), (2, MARKER_COL, MARKER)]
    );
}

#[test]
fn wrap_from_end_redraws_marker_on_first_row() {
    let mut menu = Menu::new();
    for _ in 0..4 {
        menu.move_marker();
    }
    assert_eq!(menu.position, MenuPosition::FIRST);
    assert_eq!(menu.display.char_at(4, MARKER_COL), ' ');
    assert_eq!(menu.display.char_at(1, MARKER_COL), MARKER);
}

#[test]
fn select_sets_channel_and_stars_the_row() {
    let mut menu = Menu::new();
    menu.move_marker(); // Green
    assert!(!menu.select());

    assert_eq!(menu.guessed, ColorMix::new(false, true, false));
    assert_eq!(menu.display.char_at(2, CHOSEN_COL), CHOSEN);
}

#[test]
fn selecting_the_same_row_twice_is_idempotent() {
    let mut menu = Menu::new();
    menu.select();
    let after_first = menu.guessed;

    assert!(!menu.select());
    assert_eq!(menu.guessed, after_first);
    assert_eq!(menu.guessed, ColorMix::new(true, false, false));
}

#[test]
fn selecting_end_finishes_without_touching_the_guess() {
    let mut menu = Menu::new();
    menu.select(); // Red
    for _ in 0..3 {
        menu.move_marker();
    }
    assert_eq!(menu.position, MenuPosition::END);

    assert!(menu.select());
    assert_eq!(menu.guessed, ColorMix::new(true, false, false));
    assert_eq!(menu.display.char_at(4, CHOSEN_COL), CHOSEN);
}

#[test]
fn simultaneous_edges_move_before_selecting() {
    let mut menu = Menu::new();
    menu.move_marker(); // Green

    menu.buttons.press_both();
    assert!(!menu.poll());
    // Blue is selected, not Green
    assert_eq!(menu.position.row(), 3);
    assert_eq!(menu.guessed, ColorMix::new(false, false, true));

    menu.buttons.press_both();
    assert!(menu.poll(), "move onto End and select it in one poll");
}
