use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

/// Scannable QR block for a generated payment link.
pub struct QrPanel<'a> {
    payment_url: &'a str,
}

impl<'a> QrPanel<'a> {
    pub fn new(payment_url: &'a str) -> Self {
        Self { payment_url }
    }
}

impl Component for QrPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = match QrCode::new(self.payment_url.as_bytes()) {
            Ok(code) => {
                let rendered = code.render::<Dense1x2>().build();
                rendered
                    .lines()
                    .map(|line| Line::from(line.to_string()))
                    .collect::<Vec<_>>()
            }
            Err(_) => vec![Line::from(Span::styled(
                "QR code unavailable",
                Style::default().fg(Color::Red),
            ))],
        };

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Scan to complete the payment",
            Style::default().fg(Color::DarkGray),
        )));

        let panel = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_qr_panel_render_shows_code_and_caption() {
        // Arrange
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let panel = QrPanel::new("upi://pay?pa=gradetty@upi&am=100");

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let content = buffer.content();
        let text: String = content.iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(text.contains('█'));
        assert!(text.contains("Scan to complete the payment"));
    }
}
