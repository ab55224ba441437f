//! Terminal UI components using ratatui

mod input;
mod terminal;
mod ui;

pub use input::handle_event;
pub use terminal::Tui;
pub use ui::render;
