use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::timer::Phase;

/// Session panel: title, remaining time and run state.
pub struct SessionWidget {
    phase: Phase,
    title: String,
    clock: String,
    paused: bool,
    /// Wall-clock end of the phase, shown only while running.
    ends_at: Option<String>,
}

impl SessionWidget {
    pub fn new(phase: Phase, title: String, clock: String) -> Self {
        Self {
            phase,
            title,
            clock,
            paused: false,
            ends_at: None,
        }
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_ends_at(mut self, ends_at: String) -> Self {
        self.ends_at = Some(ends_at);
        self
    }
}

pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Focusing => Color::Red,
        Phase::OnBreak => Color::Green,
    }
}

impl Widget for SessionWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = phase_color(self.phase);

        let mut lines = vec![
            Line::from(Span::styled(
                self.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(self.clock, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" remaining"),
            ]),
        ];

        if self.paused {
            lines.push(Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            )));
        } else if let Some(ends_at) = self.ends_at {
            lines.push(Line::from(Span::styled(
                format!("ends at {ends_at}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Session ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}
