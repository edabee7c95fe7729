use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::components::text_input::TextInput;
use crate::ui::icon::Icon;
use crate::ui::layout::{calculate_input_height, centered_horizontal_layout};
use crate::ui::state::login::{LoginPhase, LoginState};
use crate::ui::text_util::wrap_lines;
use crate::ui::{Component, Page};

/// Sign-in page renderer for the paste-code flow.
pub struct LoginPage<'a> {
    pub login: &'a LoginState,
}

impl<'a> LoginPage<'a> {
    /// Creates a login page renderer.
    pub fn new(login: &'a LoginState) -> Self {
        Self { login }
    }

    fn instruction_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Sign in with Google",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(auth_url) = &self.login.auth_url {
            lines.push(Line::from("1. Open this URL in your browser:"));
            // Consent URLs are far wider than the column; hard-wrap so the
            // whole URL stays visible for manual copying.
            for url_line in wrap_lines(auth_url, width) {
                lines.push(Line::from(Span::styled(
                    url_line.to_string(),
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines.push(Line::from("2. Approve access and copy the code."));
            lines.push(Line::from("3. Paste the code below and press Enter."));
        } else {
            lines.push(Line::from(Span::styled(
                "No Google client id is configured. Set GRADETTY_GOOGLE_CLIENT_ID and restart.",
                Style::default().fg(Color::Yellow),
            )));
        }

        if let LoginPhase::Failed { message } = &self.login.phase {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("✗ {message}"),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                "Paste a fresh code and press Enter to retry.",
                Style::default().fg(Color::Gray),
            )));
        }

        lines
    }
}

impl Page for LoginPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let columns = centered_horizontal_layout(area);
        let content_area = columns[1];

        if self.login.is_exchanging() {
            let status = Paragraph::new(Line::from(vec![
                Span::styled(
                    Icon::current_spinner().as_str(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" Exchanging code", Style::default().fg(Color::Gray)),
            ]));
            let rows = Layout::default()
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(content_area);
            f.render_widget(status, rows[1]);
            return;
        }

        let instructions = self.instruction_lines(usize::from(content_area.width));
        let instruction_height = u16::try_from(instructions.len()).unwrap_or(u16::MAX);
        let input_height = calculate_input_height(content_area.width, self.login.input.text());
        let rows = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(instruction_height),
                Constraint::Length(1),
                Constraint::Length(input_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content_area);

        f.render_widget(Paragraph::new(instructions), rows[1]);

        TextInput::new(
            " Authorization code ",
            self.login.input.text(),
            self.login.input.cursor,
        )
        .placeholder("Paste the code from your browser")
        .render(f, rows[3]);

        let hint = Paragraph::new("Enter: sign in | Esc: cancel")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, rows[4]);
    }
}
