use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::NoticeLevel;
use crate::ui::Component;

/// Top status bar with the app version and an optional transient notice.
pub struct StatusBar {
    notice: Option<(NoticeLevel, String)>,
    version_text: String,
}

impl StatusBar {
    pub fn new(version_text: String) -> Self {
        Self {
            notice: None,
            version_text,
        }
    }

    /// Sets the notice shown on the right side of the bar.
    #[must_use]
    pub fn notice(mut self, notice: Option<(NoticeLevel, String)>) -> Self {
        self.notice = notice;
        self
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = Span::styled(
            format!(" Gradetty {}", self.version_text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let (right_text, right_style) = match &self.notice {
            Some((NoticeLevel::Error, message)) => {
                (format!("{message} "), Style::default().fg(Color::Red))
            }
            Some((NoticeLevel::Info, message)) => {
                (format!("{message} "), Style::default().fg(Color::Green))
            }
            None => (String::new(), Style::default().fg(Color::Gray)),
        };

        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.len()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, right_style),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
