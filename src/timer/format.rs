use chrono::{DateTime, Local, TimeDelta};

use super::session::{Durations, Session};

/// Format seconds as `MM:SS`. Minutes keep counting past 59 (3600 → "60:00").
pub fn clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Heading for the session panel, e.g. "Focusing for 25:00 minutes".
pub fn session_title(durations: &Durations, session: &Session) -> String {
    format!(
        "{} for {:02}:00 minutes",
        session.phase.label(),
        durations.minutes_for(session.phase)
    )
}

/// Label next to a duration control, e.g. "Focus Duration: 05:00".
pub fn duration_label(name: &str, minutes: u32) -> String {
    format!("{name} Duration: {minutes:02}:00")
}

/// Wall-clock time at which the current phase will run out.
pub fn ends_at(now: DateTime<Local>, seconds_remaining: u32) -> String {
    let end = now + TimeDelta::seconds(i64::from(seconds_remaining));
    end.format("%H:%M").to_string()
}
