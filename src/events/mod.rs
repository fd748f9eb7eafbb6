//! Event handling for the application.
//!
//! Terminal input is polled with a fixed tick so the main loop can drive
//! time-based behavior (the search debounce) even when no keys arrive.

mod handler;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;

/// An application-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
}
