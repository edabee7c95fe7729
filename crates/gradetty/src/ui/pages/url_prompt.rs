use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::domain::input::InputState;
use crate::ui::components::text_input::TextInput;
use crate::ui::layout::{calculate_input_height, centered_horizontal_layout};
use crate::ui::{Component, Page};

/// Centered prompt for the repository URL to analyze.
pub struct UrlPromptPage<'a> {
    input: &'a InputState,
}

impl<'a> UrlPromptPage<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }
}

impl Page for UrlPromptPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let columns = centered_horizontal_layout(area);
        let input_height = calculate_input_height(columns[1].width, self.input.text());
        let rows = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(input_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        TextInput::new(" Repository URL ", self.input.text(), self.input.cursor)
            .placeholder("https://github.com/owner/repository")
            .render(f, rows[1]);

        let hint = Paragraph::new("Enter: analyze | Esc: cancel")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(hint, rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_text(input: &InputState) -> String {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                UrlPromptPage::new(input).render(f, area);
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
    fn test_url_prompt_render_shows_placeholder_when_empty() {
        // Arrange
        let input = InputState::new();

        // Act
        let text = render_to_text(&input);

        // Assert
        assert!(text.contains("Repository URL"));
        assert!(text.contains("https://github.com/owner/repository"));
        assert!(text.contains("Enter: analyze | Esc: cancel"));
    }

    #[test]
    fn test_url_prompt_render_shows_typed_url() {
        // Arrange
        let input = InputState::with_text("github.com/acme/demo".to_string());

        // Act
        let text = render_to_text(&input);

        // Assert
        assert!(text.contains("github.com/acme/demo"));
    }
}
