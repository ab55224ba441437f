//! Press-and-drag reveal gesture
//!
//! Upward pointer displacement, measured in terminal rows, is mapped
//! linearly onto a 0-100 reveal percentage. The word is exposed only while
//! the pointer is held at full progress, and the card remembers that it has
//! been peeked at so the next player can be unlocked.

/// Default rows of upward drag needed for a full reveal
pub const DEFAULT_DRAG_THRESHOLD_ROWS: u16 = 6;

/// Largest accepted drag threshold; a full reveal must fit on a card
pub const MAX_DRAG_THRESHOLD_ROWS: u16 = 50;

/// Full reveal
pub const FULL_PROGRESS: u8 = 100;

/// Pointer held on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pointer {
    start_row: u16,
    row: u16,
    /// Held from the keyboard, rows are not screen rows
    from_keyboard: bool,
}

/// Reveal state for a single card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealGesture {
    threshold: u16,
    pointer: Option<Pointer>,
    progress: u8,
    has_peeked: bool,
}

impl Default for RevealGesture {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_ROWS)
    }
}

impl RevealGesture {
    /// Create a gesture that needs `threshold` rows of drag, clamped to
    /// `1..=MAX_DRAG_THRESHOLD_ROWS`.
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.clamp(1, MAX_DRAG_THRESHOLD_ROWS),
            pointer: None,
            progress: 0,
            has_peeked: false,
        }
    }

    /// Pointer pressed at `row`.
    pub fn begin(&mut self, row: u16) {
        self.press(row, false);
    }

    /// Begin a press with no real pointer position (keyboard).
    ///
    /// The virtual pointer starts `threshold` rows from the top so that
    /// moving it all the way up is always a full reveal.
    pub fn begin_virtual(&mut self) {
        self.press(self.threshold, true);
    }

    fn press(&mut self, row: u16, from_keyboard: bool) {
        self.pointer = Some(Pointer {
            start_row: row,
            row,
            from_keyboard,
        });
        self.progress = 0;
    }

    /// Pointer moved to `row`. Ignored while not pressed.
    ///
    /// A screen row arriving during a keyboard press starts a fresh mouse
    /// press there, since the two are measured from different origins.
    pub fn update(&mut self, row: u16) {
        match self.pointer {
            None => {}
            Some(pointer) if pointer.from_keyboard => self.begin(row),
            Some(_) => self.move_to(row),
        }
    }

    fn move_to(&mut self, row: u16) {
        let Some(pointer) = self.pointer.as_mut() else {
            return;
        };
        pointer.row = row;

        let delta = i32::from(pointer.start_row) - i32::from(row);
        let percent = delta * i32::from(FULL_PROGRESS) / i32::from(self.threshold);
        self.progress = percent.clamp(0, i32::from(FULL_PROGRESS)) as u8;

        if self.progress == FULL_PROGRESS {
            self.has_peeked = true;
        }
    }

    /// Move the held pointer up by `rows` (down when negative).
    pub fn nudge(&mut self, rows: i16) {
        if let Some(pointer) = self.pointer {
            let row = pointer.row.saturating_add_signed(rows.saturating_neg());
            self.move_to(row);
        }
    }

    /// Pointer released, left the card, or the gesture was cancelled.
    pub fn end(&mut self) {
        self.pointer = None;
        self.progress = 0;
    }

    /// Forget everything, including the peek. Used when the card changes.
    pub fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }

    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[cfg(test)]
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn has_peeked(&self) -> bool {
        self.has_peeked
    }

    /// The word is on screen only while held at full progress.
    pub fn word_visible(&self) -> bool {
        self.is_active() && self.progress == FULL_PROGRESS
    }
}
