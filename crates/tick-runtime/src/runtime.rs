use std::{io, time::Duration};

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Owns the terminal event loop and the single tick timer, and executes
/// applications that implement the [`App`] trait.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a new Runtime with no tick armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms the tick timer with explicit cancel-then-reschedule semantics:
    /// the pending deadline, if any, is dropped and the next tick fires one
    /// `interval` from now. `None` disables ticks entirely.
    ///
    /// There is never more than one live deadline. Applications change speed
    /// mid-run by calling this from `handle_event` or `update`.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.rearm_tick(interval);
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` before taking over the terminal
    /// 2. Dispatches events until `app.should_exit()` returns true:
    ///    - tick deadline reached: calls `app.update()`
    ///    - redraw pending: calls `app.draw()`
    ///    - terminal input: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Input(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
