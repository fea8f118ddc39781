pub const FOCUS_MIN_MINUTES: u32 = 5;
pub const FOCUS_MAX_MINUTES: u32 = 60;
pub const FOCUS_STEP_MINUTES: u32 = 5;
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

pub const BREAK_MIN_MINUTES: u32 = 1;
pub const BREAK_MAX_MINUTES: u32 = 15;
pub const BREAK_STEP_MINUTES: u32 = 1;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// The two alternating modes of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focusing,
    OnBreak,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focusing => "Focusing",
            Phase::OnBreak => "On Break",
        }
    }

    /// The phase that follows this one when its time runs out.
    pub fn next(self) -> Phase {
        match self {
            Phase::Focusing => Phase::OnBreak,
            Phase::OnBreak => Phase::Focusing,
        }
    }
}

/// Focus and break lengths in whole minutes.
///
/// Values always sit on their step grid inside the allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Durations {
    /// Build durations, clamping each value onto its valid step grid.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: snap(
                focus_minutes,
                FOCUS_MIN_MINUTES,
                FOCUS_MAX_MINUTES,
                FOCUS_STEP_MINUTES,
            ),
            break_minutes: snap(
                break_minutes,
                BREAK_MIN_MINUTES,
                BREAK_MAX_MINUTES,
                BREAK_STEP_MINUTES,
            ),
        }
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Configured length of `phase` in minutes.
    pub fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focusing => self.focus_minutes,
            Phase::OnBreak => self.break_minutes,
        }
    }

    /// Configured length of `phase` in seconds.
    pub fn seconds_for(&self, phase: Phase) -> u32 {
        self.minutes_for(phase) * 60
    }

    /// Returns true if the value changed (false at the upper bound).
    pub fn increase_focus(&mut self) -> bool {
        step_up(&mut self.focus_minutes, FOCUS_MAX_MINUTES, FOCUS_STEP_MINUTES)
    }

    pub fn decrease_focus(&mut self) -> bool {
        step_down(&mut self.focus_minutes, FOCUS_MIN_MINUTES, FOCUS_STEP_MINUTES)
    }

    pub fn increase_break(&mut self) -> bool {
        step_up(&mut self.break_minutes, BREAK_MAX_MINUTES, BREAK_STEP_MINUTES)
    }

    pub fn decrease_break(&mut self) -> bool {
        step_down(&mut self.break_minutes, BREAK_MIN_MINUTES, BREAK_STEP_MINUTES)
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn step_up(value: &mut u32, max: u32, step: u32) -> bool {
    if *value + step > max {
        return false;
    }
    *value += step;
    true
}

fn step_down(value: &mut u32, min: u32, step: u32) -> bool {
    if *value < min + step {
        return false;
    }
    *value -= step;
    true
}

/// Clamp `value` into [min, max] and round it to the nearest step above `min`.
fn snap(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    let steps = (clamped - min + step / 2) / step;
    (min + steps * step).min(max)
}

/// The current phase and the seconds left in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    pub seconds_remaining: u32,
}

impl Session {
    /// A fresh focus session at the configured length.
    pub fn start(durations: &Durations) -> Self {
        Self::begin(Phase::Focusing, durations)
    }

    fn begin(phase: Phase, durations: &Durations) -> Self {
        Self {
            phase,
            seconds_remaining: durations.seconds_for(phase),
        }
    }
}

/// Count down one second, never going below zero.
pub fn next_tick(session: Session) -> Session {
    Session {
        seconds_remaining: session.seconds_remaining.saturating_sub(1),
        ..session
    }
}

/// Switch to the other phase at its full configured length.
pub fn next_session(durations: &Durations, session: Session) -> Session {
    Session::begin(session.phase.next(), durations)
}

/// Result of advancing a session by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One second was counted off the current phase.
    Counted(Session),
    /// The phase was exhausted and the session moved into the next one.
    Switched(Session),
}

/// One tick of the countdown, evaluated against the latest durations.
pub fn step(durations: &Durations, session: Session) -> Step {
    if session.seconds_remaining == 0 {
        Step::Switched(next_session(durations, session))
    } else {
        Step::Counted(next_tick(session))
    }
}

/// Elapsed share of the current phase, in [0, 100].
///
/// Uses the session as it stands after the tick has been applied, so the
/// bar reaches 100 on the same tick the clock reads 00:00. Durations may be
/// adjusted while paused, leaving more seconds than the phase is now
/// configured for; the result is clamped rather than going negative.
pub fn progress_percent(durations: &Durations, session: &Session) -> f64 {
    let total = durations.seconds_for(session.phase);
    if total == 0 {
        return 0.0;
    }
    let elapsed = total as f64 - session.seconds_remaining as f64;
    (elapsed / total as f64 * 100.0).clamp(0.0, 100.0)
}
