use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{SupportField, SupportManager};
use crate::ui::components::qr_panel::QrPanel;
use crate::ui::components::text_input::TextInput;
use crate::ui::icon::Icon;
use crate::ui::layout::{calculate_input_height, centered_horizontal_layout};
use crate::ui::state::help_action;
use crate::ui::{Component, Page};

const MESSAGE_PLACEHOLDER: &str = "Add an optional message for the maintainers";

/// Support page renderer for the donation form.
pub struct SupportPage<'a> {
    pub support: &'a SupportManager,
}

impl<'a> SupportPage<'a> {
    /// Creates a support page renderer.
    pub fn new(support: &'a SupportManager) -> Self {
        Self { support }
    }

    fn field_marker(&self, field: SupportField) -> Span<'static> {
        if self.support.selected_field == field {
            Span::styled(
                "› ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn label_style(&self, field: SupportField) -> Style {
        if self.support.selected_field == field {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn amount_line(&self) -> Line<'static> {
        let mut spans = vec![
            self.field_marker(SupportField::Amount),
            Span::styled("Amount   ", self.label_style(SupportField::Amount)),
            Span::styled(
                format!("₹ {}", self.support.amount),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if self.support.selected_field == SupportField::Amount {
            spans.push(Span::styled(
                "  ◀ h   l ▶",
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }

    fn message_line(&self) -> Line<'static> {
        let text = self.support.message.text();
        let value = if text.is_empty() {
            Span::styled(MESSAGE_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(text.to_string(), Style::default().fg(Color::White))
        };

        Line::from(vec![
            self.field_marker(SupportField::Message),
            Span::styled("Message  ", self.label_style(SupportField::Message)),
            value,
        ])
    }

    fn generate_line(&self) -> Line<'static> {
        let button_style = if self.support.selected_field == SupportField::Generate {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        Line::from(vec![
            self.field_marker(SupportField::Generate),
            Span::styled("[ Generate payment link ]", button_style),
        ])
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if self.support.pending {
            let status = Paragraph::new(Line::from(vec![
                Span::styled(
                    Icon::current_spinner().as_str(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(" Creating payment link", Style::default().fg(Color::Gray)),
            ]));
            f.render_widget(status, area);
        } else if let Some(link) = &self.support.link {
            let chunks = Layout::default()
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(area);
            let link_lines = vec![
                Line::from(vec![
                    Span::styled("Payment link  ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        link.payment_url.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("Transaction {}", link.transaction_id),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            f.render_widget(Paragraph::new(link_lines), chunks[0]);
            QrPanel::new(&link.payment_url).render(f, chunks[1]);
        }
    }
}

impl Page for SupportPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let block = Block::default().borders(Borders::ALL).title("Support");
        let inner_area = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        let columns = centered_horizontal_layout(inner_area);
        let form_area = columns[1];

        let message_height = if self.support.is_editing_message {
            calculate_input_height(form_area.width, self.support.message.text())
        } else {
            1
        };
        let rows = Layout::default()
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(message_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(form_area);

        let lead = Paragraph::new(vec![
            Line::from(Span::styled(
                "Support gradetty development",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Donations keep the analysis engine running.",
                Style::default().fg(Color::Gray),
            )),
        ]);
        f.render_widget(lead, rows[0]);
        f.render_widget(Paragraph::new(self.amount_line()), rows[1]);

        if self.support.is_editing_message {
            TextInput::new(
                " Message ",
                self.support.message.text(),
                self.support.message.cursor,
            )
            .placeholder(MESSAGE_PLACEHOLDER)
            .render(f, rows[3]);
        } else {
            f.render_widget(Paragraph::new(self.message_line()), rows[3]);
        }

        f.render_widget(Paragraph::new(self.generate_line()), rows[5]);
        self.render_status(f, rows[7]);

        let actions = help_action::support_footer_actions(self.support.link.is_some());
        let help_message = Paragraph::new(help_action::footer_text(&actions))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infra::api::PaymentLink;

    fn render_to_text(support: &SupportManager) -> String {
        let backend = TestBackend::new(90, 40);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                SupportPage::new(support).render(f, area);
            })
            .expect("failed to draw");

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_support_render_shows_form_fields() {
        // Arrange
        let support = SupportManager::new();

        // Act
        let text = render_to_text(&support);

        // Assert
        assert!(text.contains("Amount"));
        assert!(text.contains("₹ 100"));
        assert!(text.contains(MESSAGE_PLACEHOLDER));
        assert!(text.contains("[ Generate payment link ]"));
        assert!(!text.contains("y: copy"));
    }

    #[test]
    fn test_support_render_shows_pending_status() {
        // Arrange
        let mut support = SupportManager::new();
        support.pending = true;

        // Act
        let text = render_to_text(&support);

        // Assert
        assert!(text.contains("Creating payment link"));
    }

    #[test]
    fn test_support_render_shows_link_and_qr_code() {
        // Arrange
        let mut support = SupportManager::new();
        support.link = Some(PaymentLink {
            payment_url: "upi://pay?pa=gradetty@upi&am=100".to_string(),
            transaction_id: "txn-42".to_string(),
        });

        // Act
        let text = render_to_text(&support);

        // Assert
        assert!(text.contains("upi://pay?pa=gradetty@upi&am=100"));
        assert!(text.contains("Transaction txn-42"));
        assert!(text.contains('█'));
        assert!(text.contains("y: copy"));
    }

    #[test]
    fn test_support_render_shows_message_input_while_editing() {
        // Arrange
        let mut support = SupportManager::new();
        support.start_message_editing();

        // Act
        let text = render_to_text(&support);

        // Assert
        assert!(text.contains(" Message "));
        assert!(text.contains('›'));
    }
}
