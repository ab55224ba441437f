//! Terminal events to app actions
//!
//! Keys drive every screen. On the reveal screen the mouse acts as the
//! pointer: a left press on the card starts the gesture, dragging moves it,
//! and release, leaving the card or losing terminal focus ends it.

use crate::app::{App, SetupFocus, Stage};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::ui::reveal_card_area;

/// Apply one terminal event. `area` is the full screen, used to locate the card.
pub fn handle_event(app: &mut App, event: Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, area),
        Event::FocusLost | Event::Resize(..) => app.pointer_up(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.stage() {
        Stage::Setup => handle_setup_key(app, key.code),
        Stage::Reveal => handle_reveal_key(app, key.code),
        Stage::Summary => handle_summary_key(app, key.code),
    }
}

fn handle_setup_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => match app.focus {
            SetupFocus::NameInput => match code {
                KeyCode::Enter => app.submit_name(),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Char(c) => app.on_char(c),
                _ => {}
            },
            SetupFocus::PlayerList => match code {
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_player(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_player(),
                KeyCode::Delete | KeyCode::Backspace | KeyCode::Enter => app.remove_selected(),
                _ => {}
            },
            SetupFocus::StartButton => {
                if code == KeyCode::Enter {
                    app.start_game();
                }
            }
        },
    }
}

fn handle_reveal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc if app.gesture().is_active() => app.pointer_up(),
        KeyCode::Esc => app.quit(),
        KeyCode::Char(' ') => app.toggle_key_press(),
        KeyCode::Up | KeyCode::Char('k') => app.nudge_pointer(1),
        KeyCode::Down | KeyCode::Char('j') => app.nudge_pointer(-1),
        KeyCode::Enter | KeyCode::Char('n') => {
            app.pointer_up();
            app.advance_player();
        }
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Up => app.summary_prev(),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => app.summary_next(),
        KeyCode::Enter => app.summary_select(),
        KeyCode::Char('n') => app.restart_round(),
        KeyCode::Char('e') => app.reset_to_setup(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.stage() != Stage::Reveal {
        return;
    }

    let card = reveal_card_area(area);
    let inside = card.contains(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => app.pointer_down(mouse.row),
        MouseEventKind::Drag(MouseButton::Left) if inside => app.pointer_move(mouse.row),
        // Dragging off the card counts as the pointer leaving it
        MouseEventKind::Drag(MouseButton::Left) => app.pointer_up(),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_up(),
        _ => {}
    }
}
