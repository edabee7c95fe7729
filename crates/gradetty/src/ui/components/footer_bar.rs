use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

/// Bottom bar with the backend endpoint and the signed-in account.
pub struct FooterBar {
    account_email: Option<String>,
    api_base_url: String,
}

impl FooterBar {
    pub fn new(api_base_url: String) -> Self {
        Self {
            account_email: None,
            api_base_url,
        }
    }

    /// Sets the signed-in account email shown on the right side.
    #[must_use]
    pub fn account_email(mut self, account_email: Option<String>) -> Self {
        self.account_email = account_email;
        self
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = format!(" API: {}", self.api_base_url);
        let left_span = Span::styled(
            left_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        );

        let mut spans = vec![left_span];

        let (account_text, account_style) = match &self.account_email {
            Some(email) => (
                format!("✓ {email} "),
                Style::default().fg(Color::Green),
            ),
            None => (
                "Not signed in ".to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            ),
        };

        let left_width = left_text.len();
        let account_width = account_text.len();
        let total_width = area.width as usize;

        if left_width + account_width + 1 < total_width {
            let padding_width = total_width - left_width - account_width;
            let padding = " ".repeat(padding_width);

            spans.push(Span::raw(padding));
            spans.push(Span::styled(account_text, account_style));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
