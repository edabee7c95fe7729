use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::tree::TreeRow;
use crate::ui::Component;
use crate::ui::icon::{Icon, file_glyph};

/// Collapsible repository tree, one line per visible row.
///
/// Folders carry a disclosure marker, files carry a type glyph when one is
/// known for their extension. The row under the cursor is highlighted and the
/// listing scrolls so the cursor stays visible.
pub struct FileTree<'a> {
    cursor: usize,
    rows: &'a [TreeRow],
}

impl<'a> FileTree<'a> {
    pub fn new(rows: &'a [TreeRow], cursor: usize) -> Self {
        Self { cursor, rows }
    }
}

impl Component for FileTree<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let mut spans = vec![Span::raw("  ".repeat(row.depth))];

                if row.is_folder {
                    let marker = if row.expanded {
                        Icon::FolderOpen
                    } else {
                        Icon::FolderClosed
                    };
                    spans.push(Span::styled(
                        format!("{marker} "),
                        Style::default().fg(Color::Cyan),
                    ));
                    spans.push(Span::styled(
                        row.name.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ));
                } else {
                    if let Some(glyph) = file_glyph(&row.name) {
                        spans.push(Span::raw(format!("{glyph} ")));
                    }
                    spans.push(Span::styled(
                        row.name.clone(),
                        Style::default().fg(Color::White),
                    ));
                }

                let line = Line::from(spans);
                if index == self.cursor {
                    line.style(Style::default().bg(Color::DarkGray))
                } else {
                    line
                }
            })
            .collect::<Vec<_>>();

        let visible_height = area.height as usize;
        let scroll = if visible_height == 0 {
            0
        } else {
            self.cursor.saturating_sub(visible_height - 1)
        };

        let tree = Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        f.render_widget(tree, area);
    }
}
