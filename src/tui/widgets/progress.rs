use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge, Widget};

pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;

/// Elapsed share of the current phase.
///
/// The label carries the numeric value so the bar can be read without
/// relying on its fill.
pub struct ProgressWidget {
    percent: f64,
    color: Color,
}

impl ProgressWidget {
    pub fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(PROGRESS_MIN, PROGRESS_MAX),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

impl Widget for ProgressWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = self.label();
        Gauge::default()
            .block(Block::default().title(" Progress ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(self.color))
            .ratio(self.percent / PROGRESS_MAX)
            .label(label)
            .render(area, buf);
    }
}
