use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Page;
use crate::ui::icon::Icon;

/// Analysis stages revealed as elapsed seconds pass each threshold.
const ANALYSIS_STAGES: [(u64, &str); 4] = [
    (0, "Cloning repository"),
    (2, "Scanning file structure"),
    (5, "Evaluating code quality"),
    (9, "Compiling roadmap"),
];

/// Progress page shown while an analysis request is in flight.
pub struct AnalyzingPage<'a> {
    pub repo_url: &'a str,
    pub started_at: Instant,
}

impl<'a> AnalyzingPage<'a> {
    /// Creates an analyzing page renderer.
    pub fn new(repo_url: &'a str, started_at: Instant) -> Self {
        Self {
            repo_url,
            started_at,
        }
    }

    fn stage_lines(&self) -> Vec<Line<'static>> {
        let elapsed_seconds = self.started_at.elapsed().as_secs();
        let visible_count = ANALYSIS_STAGES
            .iter()
            .filter(|(threshold, _)| *threshold <= elapsed_seconds)
            .count()
            .max(1);

        ANALYSIS_STAGES
            .iter()
            .take(visible_count)
            .enumerate()
            .map(|(index, (_, label))| {
                if index + 1 < visible_count {
                    Line::from(vec![
                        Span::styled(Icon::Check.as_str(), Style::default().fg(Color::Green)),
                        Span::styled(format!(" {label}"), Style::default().fg(Color::Gray)),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(
                            Icon::current_spinner().as_str(),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(format!(" {label}"), Style::default().fg(Color::White)),
                    ])
                }
            })
            .collect()
    }
}

impl Page for AnalyzingPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let stage_lines = self.stage_lines();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Analyzing ", Style::default().fg(Color::White)),
                Span::styled(
                    self.repo_url.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        lines.extend(stage_lines);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "This can take a minute on large repositories.",
            Style::default().fg(Color::DarkGray),
        )));

        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let rows = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(area);

        let progress = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(progress, rows[1]);
    }
}
