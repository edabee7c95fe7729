use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::analysis::User;
use crate::ui::Page;
use crate::ui::state::help_action;

/// Account page renderer.
pub struct AccountPage<'a> {
    pub current_user: Option<&'a User>,
    pub is_authenticated: bool,
}

impl<'a> AccountPage<'a> {
    /// Creates an account page renderer.
    pub fn new(current_user: Option<&'a User>, is_authenticated: bool) -> Self {
        Self {
            current_user,
            is_authenticated,
        }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        if self.is_authenticated {
            let mut lines = vec![
                Line::from(Span::styled(
                    "✓ Signed in with Google",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];

            if let Some(user) = self.current_user {
                lines.push(Line::from(Span::styled(
                    user.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    user.email.clone(),
                    Style::default().fg(Color::Gray),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "Loading profile",
                    Style::default().fg(Color::Gray),
                )));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Email delivery for PDF reports is enabled.",
                Style::default().fg(Color::Gray),
            )));

            lines
        } else {
            vec![
                Line::from(Span::styled(
                    "You are not signed in.",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Sign in to email PDF reports and keep your history in sync.",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[ Press Enter to sign in with Google ]",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
            ]
        }
    }
}

impl Page for AccountPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let block = Block::default().borders(Borders::ALL).title("Account");
        let inner_area = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        let lines = self.body_lines();
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let vertical_chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(inner_area);

        let body = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(body, vertical_chunks[1]);

        let actions = help_action::account_footer_actions(self.is_authenticated);
        let help_message = Paragraph::new(help_action::footer_text(&actions))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, chunks[1]);
    }
}
