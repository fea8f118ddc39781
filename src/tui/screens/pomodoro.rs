use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::info;

use crate::audio::Notifier;
use crate::timer::{format, Action, Ticker, TimerWidget};
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::widgets::duration::{button_style, DurationWidget};
use crate::tui::widgets::progress::ProgressWidget;
use crate::tui::widgets::session::{phase_color, SessionWidget};
use crate::tui::Tui;

/// How often the event thread wakes up without input. Well under the tick
/// period so the countdown deadline is noticed promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Timer(Action),
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePlayPause,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Left => Action::DecreaseFocus,
        KeyCode::Right => Action::IncreaseFocus,
        KeyCode::Down => Action::DecreaseBreak,
        KeyCode::Up => Action::IncreaseBreak,
        _ => return None,
    };
    Some(Input::Timer(action))
}

fn key_hint(action: Action) -> &'static str {
    match action {
        Action::DecreaseFocus => "←",
        Action::IncreaseFocus => "→",
        Action::DecreaseBreak => "↓",
        Action::IncreaseBreak => "↑",
        Action::TogglePlayPause => "Space",
        Action::Stop => "s",
    }
}

/// One countdown tick, then the notification if a phase ran out.
/// The transition is applied before the notifier is called.
pub fn on_tick(widget: &mut TimerWidget, notifier: &dyn Notifier) {
    if let Some(next) = widget.tick() {
        notifier.phase_ended(next);
    }
}

/// Run the timer screen until the user quits.
pub fn run(
    terminal: &mut Tui,
    widget: &mut TimerWidget,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let events = EventHandler::new(POLL_INTERVAL);
    let mut ticker = Ticker::default();

    loop {
        if ticker.fire(Instant::now()) {
            on_tick(widget, notifier);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            render(frame, area, widget, Local::now());
        })?;

        match events.next()? {
            AppEvent::Key(key) => match map_key(key) {
                Some(Input::Quit) => break,
                Some(Input::Timer(action)) => {
                    widget.apply(action);
                    ticker.follow(widget.is_running(), Instant::now());
                }
                None => {}
            },
            AppEvent::Idle | AppEvent::Resize(_, _) => {}
        }
    }

    info!("timer closed");
    Ok(())
}

fn render(frame: &mut ratatui::Frame, area: Rect, widget: &TimerWidget, now: DateTime<Local>) {
    let outer = Block::default()
        .title(" Pomodoro ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::vertical([
        Constraint::Length(3), // durations
        Constraint::Length(5), // session
        Constraint::Length(3), // progress
        Constraint::Min(0),    // spacer
        Constraint::Length(1), // key hint
    ])
    .split(inner);

    let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let durations = widget.durations();
    let unlocked = widget.can_adjust_config();
    frame.render_widget(
        DurationWidget::new(
            "Focus",
            durations.focus_minutes(),
            (key_hint(Action::DecreaseFocus), key_hint(Action::IncreaseFocus)),
        )
        .enabled(unlocked),
        cols[0],
    );
    frame.render_widget(
        DurationWidget::new(
            "Break",
            durations.break_minutes(),
            (key_hint(Action::DecreaseBreak), key_hint(Action::IncreaseBreak)),
        )
        .enabled(unlocked),
        cols[1],
    );

    // Session panel only exists while there is a session, running or paused
    if let Some(session) = widget.session() {
        let title = format::session_title(durations, session);
        let clock = format::clock(session.seconds_remaining);
        let mut panel = SessionWidget::new(session.phase, title, clock).paused(widget.is_paused());
        if widget.is_running() {
            panel = panel.with_ends_at(format::ends_at(now, session.seconds_remaining));
        }
        frame.render_widget(panel, rows[1]);

        frame.render_widget(
            ProgressWidget::new(widget.progress_percent()).color(phase_color(session.phase)),
            rows[2],
        );
    }

    frame.render_widget(Paragraph::new(hint_line(widget)), rows[4]);
}

/// Play/pause and stop buttons, dimmed when disabled, plus quit.
fn hint_line(widget: &TimerWidget) -> Line<'static> {
    let mut spans = Vec::new();
    for control in widget.controls() {
        if !matches!(control.action, Action::TogglePlayPause | Action::Stop) {
            continue;
        }
        spans.push(Span::styled(
            format!("  [{}]", key_hint(control.action)),
            button_style(control.enabled),
        ));
        spans.push(Span::raw(format!(" {}", control.label.to_lowercase())));
    }
    spans.push(Span::styled(
        "  [q]",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" quit"));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::TimeZone;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::timer::{Durations, Phase};

    /// Counts notifications instead of playing them.
    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
        last: Cell<Option<Phase>>,
    }

    impl Notifier for Counting {
        fn phase_ended(&self, next: Phase) {
            self.calls.set(self.calls.get() + 1);
            self.last.set(Some(next));
        }
    }

    fn screen_text(widget: &TimerWidget) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let now = Local.with_ymd_and_hms(2026, 2, 8, 9, 0, 0).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, widget, now);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            map_key(key(KeyCode::Char(' '))),
            Some(Input::Timer(Action::TogglePlayPause))
        );
        assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Input::Timer(Action::Stop)));
        assert_eq!(
            map_key(key(KeyCode::Right)),
            Some(Input::Timer(Action::IncreaseFocus))
        );
        assert_eq!(
            map_key(key(KeyCode::Down)),
            Some(Input::Timer(Action::DecreaseBreak))
        );
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Some(Input::Quit));
    }

    #[test]
    fn notification_fires_once_at_focus_boundary() {
        let notifier = Counting::default();
        let mut w = TimerWidget::default();
        w.apply(Action::TogglePlayPause);
        assert_eq!(w.session().unwrap().seconds_remaining, 1500);

        for _ in 0..1500 {
            on_tick(&mut w, &notifier);
        }
        let s = w.session().unwrap();
        assert_eq!((s.phase, s.seconds_remaining), (Phase::Focusing, 0));
        assert_eq!(notifier.calls.get(), 0);

        on_tick(&mut w, &notifier);
        let s = w.session().unwrap();
        assert_eq!((s.phase, s.seconds_remaining), (Phase::OnBreak, 300));
        assert_eq!(notifier.calls.get(), 1);
        assert_eq!(notifier.last.get(), Some(Phase::OnBreak));

        on_tick(&mut w, &notifier);
        assert_eq!(notifier.calls.get(), 1);
    }

    #[test]
    fn no_notifications_while_paused() {
        let notifier = Counting::default();
        let mut w = TimerWidget::new(Durations::new(5, 1));
        w.apply(Action::TogglePlayPause);
        w.apply(Action::TogglePlayPause);
        for _ in 0..1000 {
            on_tick(&mut w, &notifier);
        }
        assert_eq!(notifier.calls.get(), 0);
        assert_eq!(w.session().unwrap().seconds_remaining, 300);
    }

    #[test]
    fn idle_screen_shows_durations_only() {
        let text = screen_text(&TimerWidget::default());
        assert!(text.contains("Focus Duration: 25:00"));
        assert!(text.contains("Break Duration: 05:00"));
        assert!(!text.contains("remaining"));
        assert!(text.contains("play"));
    }

    #[test]
    fn running_screen_shows_session() {
        let mut w = TimerWidget::default();
        w.apply(Action::TogglePlayPause);
        w.tick();
        let text = screen_text(&w);
        assert!(text.contains("Focusing for 25:00 minutes"));
        assert!(text.contains("24:59 remaining"));
        assert!(text.contains("ends at 09:24"));
        assert!(text.contains("pause"));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn paused_screen_says_so() {
        let mut w = TimerWidget::default();
        w.apply(Action::TogglePlayPause);
        w.apply(Action::TogglePlayPause);
        let text = screen_text(&w);
        assert!(text.contains("PAUSED"));
        assert!(!text.contains("ends at"));
    }

    #[test]
    fn stopped_screen_hides_session() {
        let mut w = TimerWidget::default();
        w.apply(Action::TogglePlayPause);
        w.apply(Action::Stop);
        let text = screen_text(&w);
        assert!(!text.contains("Focusing"));
    }
}
