use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for applications executed by [`Runtime::run`].
pub trait App {
    /// One-time setup, called before the event loop starts. Arm the initial
    /// tick interval here via [`Runtime::set_tick_interval`].
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, mouse, resize).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances application state by one tick.
    fn update(&mut self, runtime: &mut Runtime);
}
