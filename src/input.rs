//! Button input collaborator.
//!
//! The game uses two buttons. During a test the bottom one moves the menu
//! marker and the top one selects. Both must be reported as edges: one
//! `true` per physical press, never a held level.

/// One of the two game buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Top,
    Bottom,
}

impl ButtonId {
    /// Short label used on the instructions screen.
    pub fn label(self) -> &'static str {
        match self {
            ButtonId::Top => "TOP",
            ButtonId::Bottom => "BTM",
        }
    }
}

/// Button that moves the menu marker.
pub const MOVE_BUTTON: ButtonId = ButtonId::Bottom;

/// Button that marks the highlighted row as chosen.
pub const SELECT_BUTTON: ButtonId = ButtonId::Top;

/// Edge-triggered button input.
///
/// Each method returns `true` at most once per physical press and must not
/// block.
pub trait Buttons {
    /// Returns true if the top button was pressed since the last call.
    fn top_pressed(&mut self) -> bool;

    /// Returns true if the bottom button was pressed since the last call.
    fn bottom_pressed(&mut self) -> bool;

    /// Edge query by button id.
    fn pressed(&mut self, button: ButtonId) -> bool {
        match button {
            ButtonId::Top => self.top_pressed(),
            ButtonId::Bottom => self.bottom_pressed(),
        }
    }

    /// Reads and drops any pending edge on both buttons.
    ///
    /// Called where no state is listening, so presses made there do not
    /// surface on a later screen.
    fn discard_pending(&mut self) {
        let _ = self.top_pressed();
        let _ = self.bottom_pressed();
    }
}

/// Turns a sampled button level into press edges.
///
/// For drivers that can only read the pin level. A press is reported on the
/// transition to pressed, and only if at least `debounce_ms` has passed
/// since the previous reported press. A press suppressed by the window still
/// counts as held, so it cannot report once the window runs out.
pub struct EdgeDetector {
    pressed: bool,
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl EdgeDetector {
    /// Creates a detector with the given minimum spacing between presses.
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            pressed: false,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Feeds the current level and time, returns true on a new press.
    ///
    /// `now_ms` may wrap around.
    pub fn update(&mut self, is_pressed: bool, now_ms: u32) -> bool {
        if is_pressed && !self.pressed {
            let settled = match self.last_press_ms {
                Some(last) => now_ms.wrapping_sub(last) >= self.debounce_ms,
                None => true,
            };
            self.pressed = true;
            if settled {
                self.last_press_ms = Some(now_ms);
                return true;
            }
        } else if !is_pressed && self.pressed {
            self.pressed = false;
        }
        false
    }
}
