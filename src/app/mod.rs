//! Application state and core logic

pub mod screen;
pub mod state;

pub use screen::{SetupFocus, Stage, SummaryOption};
pub use state::App;
