use crossterm::event::Event as CrosstermEvent;

/// Events delivered to applications by the runtime.
#[derive(Debug, Clone, derive_more::From)]
pub(crate) enum TuiEvent {
    /// A tick deadline elapsed.
    Tick,
    /// The screen needs redrawing.
    Render,
    /// Terminal input such as key presses, mouse, and resize.
    Input(CrosstermEvent),
}
