use crossterm::event::{Event, KeyCode};
use ratatui::Frame;
use stakkr_engine::GameSession;
use tick_runtime::{App, Runtime};

use crate::ui::widgets::SessionDisplay;

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: GameSession,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    /// Brings the runtime's single timer in step with the session's cadence.
    fn rearm(&self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(self.session.tick_interval()));
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        self.rearm(runtime);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let is_running = self.session.phase().is_running();

        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Char(' ') if is_running => {
                    let interval = self.session.tick_interval();
                    self.session.commit();
                    // A commit can speed the game up or end it; only then is
                    // the timer re-armed, so ordinary commits keep their beat.
                    if self.session.tick_interval() != interval {
                        self.rearm(runtime);
                    }
                }
                KeyCode::Char('r') if !is_running => {
                    self.session.reset();
                    self.rearm(runtime);
                }
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(SessionDisplay::new(&self.session), frame.area());
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.session.tick();
    }
}
