use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::timer::format;

/// One duration setting with its -/+ buttons.
pub struct DurationWidget<'a> {
    name: &'a str,
    minutes: u32,
    /// Key hints for the decrease and increase buttons.
    keys: (&'a str, &'a str),
    enabled: bool,
}

impl<'a> DurationWidget<'a> {
    pub fn new(name: &'a str, minutes: u32, keys: (&'a str, &'a str)) -> Self {
        Self {
            name,
            minutes,
            keys,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

pub(crate) fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Widget for DurationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = button_style(self.enabled);
        let line = Line::from(vec![
            Span::raw(format::duration_label(self.name, self.minutes)),
            Span::raw("  "),
            Span::styled(format!("[{} -]", self.keys.0), style),
            Span::raw(" "),
            Span::styled(format!("[{} +]", self.keys.1), style),
        ]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
