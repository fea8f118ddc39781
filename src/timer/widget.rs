use tracing::{debug, info};

use super::session::{self, Durations, Phase, Session, Step};

/// A user-triggered operation on the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DecreaseFocus,
    IncreaseFocus,
    DecreaseBreak,
    IncreaseBreak,
    TogglePlayPause,
    Stop,
}

/// A control as the rendering layer should present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub action: Action,
    pub label: &'static str,
    pub enabled: bool,
}

/// State of the Pomodoro timer: configured durations, the optional current
/// session, whether the countdown is running, and the derived progress.
///
/// Invariant: `running` implies `session.is_some()`. Every mutation goes
/// through the methods below, and each one keeps it.
#[derive(Debug, Clone)]
pub struct TimerWidget {
    durations: Durations,
    session: Option<Session>,
    running: bool,
    progress: f64,
}

impl TimerWidget {
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            session: None,
            running: false,
            progress: 0.0,
        }
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A session exists but the countdown is suspended.
    pub fn is_paused(&self) -> bool {
        self.session.is_some() && !self.running
    }

    /// Elapsed share of the current phase, 0–100.
    pub fn progress_percent(&self) -> f64 {
        self.progress
    }

    /// Durations may only change while the countdown is not ticking.
    /// A paused session does not lock them.
    pub fn can_adjust_config(&self) -> bool {
        !self.running
    }

    /// Stop is meaningful whenever there is a session to discard,
    /// running or paused.
    pub fn can_stop(&self) -> bool {
        self.session.is_some()
    }

    pub fn can_toggle(&self) -> bool {
        true
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::DecreaseFocus
            | Action::IncreaseFocus
            | Action::DecreaseBreak
            | Action::IncreaseBreak => self.can_adjust_config(),
            Action::TogglePlayPause => self.can_toggle(),
            Action::Stop => self.can_stop(),
        }
    }

    pub fn increase_focus(&mut self) -> bool {
        self.adjust("focus", Durations::increase_focus)
    }

    pub fn decrease_focus(&mut self) -> bool {
        self.adjust("focus", Durations::decrease_focus)
    }

    pub fn increase_break(&mut self) -> bool {
        self.adjust("break", Durations::increase_break)
    }

    pub fn decrease_break(&mut self) -> bool {
        self.adjust("break", Durations::decrease_break)
    }

    fn adjust(&mut self, which: &str, op: fn(&mut Durations) -> bool) -> bool {
        if !self.can_adjust_config() {
            debug!(which, "duration change rejected while running");
            return false;
        }
        let changed = op(&mut self.durations);
        if changed {
            // A paused session is measured against the new length right away
            if let Some(s) = &self.session {
                self.progress = session::progress_percent(&self.durations, s);
            }
            debug!(
                focus = self.durations.focus_minutes(),
                break_ = self.durations.break_minutes(),
                "durations adjusted"
            );
        }
        changed
    }

    /// Start, pause or resume.
    ///
    /// Starting with no session begins a focus phase at the configured
    /// length. Resuming and pausing leave the session exactly as it was.
    pub fn toggle_play_pause(&mut self) {
        self.running = !self.running;

        if self.running {
            match self.session {
                None => {
                    let s = Session::start(&self.durations);
                    info!(seconds = s.seconds_remaining, "session started");
                    self.session = Some(s);
                    self.progress = 0.0;
                }
                Some(s) => info!(seconds = s.seconds_remaining, "session resumed"),
            }
        } else if let Some(s) = self.session {
            info!(seconds = s.seconds_remaining, "session paused");
        }
    }

    /// Discard the session and stop ticking, whatever the current state.
    pub fn stop(&mut self) {
        if self.session.is_some() {
            info!("session stopped");
        }
        self.session = None;
        self.running = false;
        self.progress = 0.0;
    }

    /// Run a user action if its control is enabled. Returns true if it ran.
    pub fn apply(&mut self, action: Action) -> bool {
        if !self.is_enabled(action) {
            return false;
        }
        match action {
            Action::DecreaseFocus => self.decrease_focus(),
            Action::IncreaseFocus => self.increase_focus(),
            Action::DecreaseBreak => self.decrease_break(),
            Action::IncreaseBreak => self.increase_break(),
            Action::TogglePlayPause => {
                self.toggle_play_pause();
                true
            }
            Action::Stop => {
                self.stop();
                true
            }
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the phase just entered when the previous one ran out, so the
    /// caller can fire the end-of-phase notification. Does nothing while
    /// paused or stopped.
    pub fn tick(&mut self) -> Option<Phase> {
        if !self.running {
            return None;
        }
        let current = self.session?;

        match session::step(&self.durations, current) {
            Step::Counted(next) => {
                self.progress = session::progress_percent(&self.durations, &next);
                self.session = Some(next);
                None
            }
            Step::Switched(next) => {
                info!(
                    from = current.phase.label(),
                    to = next.phase.label(),
                    seconds = next.seconds_remaining,
                    "phase switched"
                );
                self.progress = 0.0;
                self.session = Some(next);
                Some(next.phase)
            }
        }
    }

    /// Every control with its current label and enabled state.
    pub fn controls(&self) -> Vec<Control> {
        let play_label = if self.running { "Pause" } else { "Play" };
        [
            (Action::DecreaseFocus, "Focus -"),
            (Action::IncreaseFocus, "Focus +"),
            (Action::DecreaseBreak, "Break -"),
            (Action::IncreaseBreak, "Break +"),
            (Action::TogglePlayPause, play_label),
            (Action::Stop, "Stop"),
        ]
        .into_iter()
        .map(|(action, label)| Control {
            action,
            label,
            enabled: self.is_enabled(action),
        })
        .collect()
    }
}

impl Default for TimerWidget {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
