use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// One armed tick deadline.
#[derive(Debug, Clone, Copy)]
struct TickTimer {
    interval: Duration,
    next_at: Instant,
}

/// Event source multiplexing the tick timer and terminal input.
///
/// At most one tick deadline is armed at any moment. Re-arming cancels the
/// pending deadline and schedules a fresh one a full interval from now, so a
/// new period takes effect immediately instead of after the old one elapses.
#[derive(Debug)]
pub(crate) struct EventLoop {
    tick: Option<TickTimer>,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(crate) fn new() -> Self {
        Self {
            tick: None,
            // The first frame must be drawn before anything happens.
            dirty: true,
        }
    }

    /// Cancels any pending tick deadline; with `Some`, the next tick fires
    /// one `interval` from now.
    pub(crate) fn rearm_tick(&mut self, interval: Option<Duration>) {
        self.tick = interval.map(|interval| TickTimer {
            interval,
            next_at: Instant::now() + interval,
        });
    }

    /// Returns the next event.
    ///
    /// Blocks until the tick deadline is reached, a redraw is pending, or a
    /// terminal event arrives. With no tick armed, only input is waited on.
    pub(crate) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(timer) = &mut self.tick
                && now >= timer.next_at
            {
                // Late ticks do not catch up; the next deadline counts from now.
                timer.next_at = now + timer.interval;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timer) = &self.tick {
                let timeout = timer.next_at.saturating_duration_since(now);
                if !event::poll(timeout)? {
                    continue;
                }
            }
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }
}
