use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events consumed by the TUI main loop.
pub enum AppEvent {
    /// A key press. Release and repeat events are filtered out.
    Key(KeyEvent),
    #[allow(dead_code)]
    Resize(u16, u16),
    /// Nothing happened within the poll interval.
    Idle,
}

/// Polls crossterm on a background thread and forwards events.
///
/// `Idle` is sent whenever a poll interval passes without input, so the
/// main loop wakes often enough to check the countdown deadline.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: std::thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || loop {
            let event = if event::poll(poll_interval).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        AppEvent::Key(key)
                    }
                    Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                    _ => continue,
                }
            } else {
                AppEvent::Idle
            };

            // Receiver gone: the screen has exited
            if tx.send(event).is_err() {
                return;
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Block until the next event.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
