//! Application state management
//!
//! `App` owns everything the single view needs: the player list, the name
//! being typed, the inline error, the current stage, the dealt round and the
//! reveal gesture of the card on screen. Every user action is a method here.

use crate::config::Config;
use crate::game::reveal::RevealGesture;
use crate::game::validation::{validate_name, SetupError, MIN_PLAYERS};
use crate::game::words::WordList;
use crate::game::{deal_round, Assignment, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::screen::{SetupFocus, Stage, SummaryOption};

/// Longest name the input box accepts, in characters
pub const MAX_NAME_INPUT: usize = 24;

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Name being typed on the setup screen
    pub name_input: String,
    /// Focused control on the setup screen
    pub focus: SetupFocus,
    /// Highlighted row in the player list
    pub selected_player: usize,
    /// Highlighted option on the summary screen
    pub summary_selected: usize,
    /// Players in entry order
    players: Vec<Player>,
    /// Last input error, shown inline
    error: Option<SetupError>,
    /// Current stage
    stage: Stage,
    /// Assignments for the current round
    assignments: Vec<Assignment>,
    /// Index of the card on screen
    current_index: usize,
    /// Reveal gesture of the card on screen
    gesture: RevealGesture,
    /// Candidate secret words
    words: WordList,
    /// Word given to the impostor
    impostor_word: String,
    /// Random source for dealing rounds
    rng: StdRng,
}

impl App {
    /// Create a new application instance with an OS-seeded random source
    pub fn new(config: &Config, words: WordList) -> Self {
        Self::with_rng(config, words, StdRng::from_os_rng())
    }

    /// Create an application instance with a specific random source (for testing/seeding)
    pub fn with_rng(config: &Config, words: WordList, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            name_input: String::new(),
            focus: SetupFocus::default(),
            selected_player: 0,
            summary_selected: 0,
            players: Vec::new(),
            error: None,
            stage: Stage::default(),
            assignments: Vec::new(),
            current_index: 0,
            gesture: RevealGesture::new(config.drag_threshold),
            words,
            impostor_word: config.impostor_word.clone(),
            rng,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn error(&self) -> Option<&SetupError> {
        self.error.as_ref()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn gesture(&self) -> &RevealGesture {
        &self.gesture
    }

    /// Whether the start control is enabled
    pub fn is_ready_to_play(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    // --- Setup -----------------------------------------------------------

    /// Handle character input into the name box
    pub fn on_char(&mut self, c: char) {
        if self.stage != Stage::Setup || self.focus != SetupFocus::NameInput {
            return;
        }
        if self.name_input.chars().count() < MAX_NAME_INPUT {
            self.name_input.push(c);
        }
    }

    /// Handle backspace in the name box
    pub fn on_backspace(&mut self) {
        if self.stage != Stage::Setup || self.focus != SetupFocus::NameInput {
            return;
        }
        self.name_input.pop();
    }

    /// Add the typed name as a new player.
    ///
    /// On a validation error the player list and the typed text are kept
    /// and the error is shown.
    pub fn submit_name(&mut self) {
        if self.stage != Stage::Setup {
            return;
        }

        match validate_name(&self.name_input, &self.players) {
            Ok(name) => {
                self.players.push(Player::new(name));
                self.name_input.clear();
                self.error = None;
                info!(players = self.players.len(), "player added");
            }
            Err(e) => {
                debug!(error = %e, "name rejected");
                self.error = Some(e);
            }
        }
    }

    /// Remove a player by id. Returns whether a player was removed.
    pub fn remove_player(&mut self, id: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        let removed = self.players.len() != before;

        if removed {
            info!(players = self.players.len(), "player removed");
        }
        if self.selected_player >= self.players.len() {
            self.selected_player = self.players.len().saturating_sub(1);
        }
        removed
    }

    /// Remove the highlighted player in the list
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.players.get(self.selected_player).map(|p| p.id) {
            self.remove_player(id);
        }
    }

    /// Move focus to the next setup control
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous setup control
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Player list navigation (up)
    pub fn select_prev_player(&mut self) {
        if self.selected_player > 0 {
            self.selected_player -= 1;
        }
    }

    /// Player list navigation (down)
    pub fn select_next_player(&mut self) {
        if self.selected_player < self.players.len().saturating_sub(1) {
            self.selected_player += 1;
        }
    }

    /// Deal a round and move to the reveal stage.
    ///
    /// Needs at least three players and a non-empty word list; otherwise
    /// the stage stays at setup and the error is shown.
    pub fn start_game(&mut self) {
        if self.stage != Stage::Setup {
            return;
        }

        match deal_round(&self.players, &self.words, &self.impostor_word, &mut self.rng) {
            Ok(assignments) => {
                self.error = None;
                self.begin_reveal(assignments);
            }
            Err(e) => {
                warn!(error = %e, players = self.players.len(), "cannot start round");
                self.error = Some(e);
            }
        }
    }

    fn begin_reveal(&mut self, assignments: Vec<Assignment>) {
        info!(players = assignments.len(), "round dealt");
        self.assignments = assignments;
        self.current_index = 0;
        self.gesture.reset();
        self.summary_selected = 0;
        self.stage = Stage::Reveal;
    }

    // --- Reveal ----------------------------------------------------------

    /// The card on screen, if any
    pub fn current_assignment(&self) -> Option<&Assignment> {
        if self.stage != Stage::Reveal {
            return None;
        }
        self.assignments.get(self.current_index)
    }

    /// 1-based position of the card on screen
    pub fn position(&self) -> usize {
        self.current_index + 1
    }

    pub fn is_last_card(&self) -> bool {
        self.current_index + 1 >= self.assignments.len()
    }

    /// Whether the next control is enabled
    pub fn can_advance(&self) -> bool {
        self.stage == Stage::Reveal && self.gesture.has_peeked()
    }

    /// Pointer pressed on the card
    pub fn pointer_down(&mut self, row: u16) {
        if self.stage == Stage::Reveal {
            self.gesture.begin(row);
        }
    }

    /// Pointer moved while pressed
    pub fn pointer_move(&mut self, row: u16) {
        if self.stage == Stage::Reveal {
            let peeked = self.gesture.has_peeked();
            self.gesture.update(row);
            if !peeked && self.gesture.has_peeked() {
                debug!(position = self.position(), "card revealed");
            }
        }
    }

    /// Pointer released, left the card or cancelled
    pub fn pointer_up(&mut self) {
        self.gesture.end();
    }

    /// Keyboard press: hold or release the virtual pointer
    pub fn toggle_key_press(&mut self) {
        if self.stage != Stage::Reveal {
            return;
        }
        if self.gesture.is_active() {
            self.gesture.end();
        } else {
            self.gesture.begin_virtual();
        }
    }

    /// Keyboard drag: move the held virtual pointer up by `rows`
    pub fn nudge_pointer(&mut self, rows: i16) {
        if self.stage == Stage::Reveal {
            let peeked = self.gesture.has_peeked();
            self.gesture.nudge(rows);
            if !peeked && self.gesture.has_peeked() {
                debug!(position = self.position(), "card revealed");
            }
        }
    }

    /// Hand the device to the next player, or finish after the last card.
    ///
    /// Ignored until the current card has been revealed at least once.
    pub fn advance_player(&mut self) {
        if !self.can_advance() {
            return;
        }

        self.gesture.reset();
        if self.current_index + 1 >= self.assignments.len() {
            info!("all cards revealed");
            self.stage = Stage::Summary;
            return;
        }
        self.current_index += 1;
    }

    // --- Summary ---------------------------------------------------------

    /// Summary navigation (previous option)
    pub fn summary_prev(&mut self) {
        if self.summary_selected > 0 {
            self.summary_selected -= 1;
        }
    }

    /// Summary navigation (next option)
    pub fn summary_next(&mut self) {
        if self.summary_selected < SummaryOption::all().len() - 1 {
            self.summary_selected += 1;
        }
    }

    /// Activate the highlighted summary option
    pub fn summary_select(&mut self) {
        if self.stage != Stage::Summary {
            return;
        }
        match SummaryOption::all()[self.summary_selected] {
            SummaryOption::NewWord => self.restart_round(),
            SummaryOption::EditPlayers => self.reset_to_setup(),
        }
    }

    /// Deal a fresh round for the same players.
    ///
    /// Word and impostor are drawn again and may repeat. Falls back to the
    /// setup screen if the round cannot be dealt.
    pub fn restart_round(&mut self) {
        if self.players.len() < MIN_PLAYERS {
            self.reset_to_setup();
            return;
        }

        match deal_round(&self.players, &self.words, &self.impostor_word, &mut self.rng) {
            Ok(assignments) => self.begin_reveal(assignments),
            Err(e) => {
                warn!(error = %e, "cannot restart round");
                self.reset_to_setup();
                self.error = Some(e);
            }
        }
    }

    /// Go back to editing the player list
    pub fn reset_to_setup(&mut self) {
        self.stage = Stage::Setup;
        self.assignments.clear();
        self.current_index = 0;
        self.gesture.reset();
        self.focus = SetupFocus::NameInput;
    }
}
