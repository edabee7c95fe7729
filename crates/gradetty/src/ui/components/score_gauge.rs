use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::analysis::ScoreBand;
use crate::ui::Component;

/// Horizontal score bar with the numeric score and its band label.
pub struct ScoreGauge {
    score: f64,
}

impl ScoreGauge {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl Component for ScoreGauge {
    fn render(&self, f: &mut Frame, area: Rect) {
        let clamped = self.score.clamp(0.0, 100.0);
        let band = ScoreBand::for_score(clamped);
        let bar_width = usize::from(area.width.saturating_sub(2));
        let filled = ((clamped / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);

        let bar = Line::from(vec![
            Span::raw(" "),
            Span::styled("█".repeat(filled), Style::default().fg(band.color())),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let label = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{clamped:.1} / 100"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                band.label(),
                Style::default()
                    .fg(band.color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let gauge = Paragraph::new(vec![bar, label]);
        f.render_widget(gauge, area);
    }
}
