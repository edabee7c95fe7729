use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::components::file_tree::FileTree;
use crate::ui::components::score_gauge::ScoreGauge;
use crate::ui::state::help_action;
use crate::ui::state::report::{ReportPane, ReportState};
use crate::ui::{Component, Page};

/// Report page renderer with Overview, Files, and Roadmap panes.
pub struct ReportPage<'a> {
    pub is_authenticated: bool,
    pub report: &'a ReportState,
}

impl<'a> ReportPage<'a> {
    /// Creates a report page renderer.
    pub fn new(is_authenticated: bool, report: &'a ReportState) -> Self {
        Self {
            is_authenticated,
            report,
        }
    }

    fn pane_tabs_line(&self) -> Line<'static> {
        let panes = [ReportPane::Overview, ReportPane::Files, ReportPane::Roadmap];
        let mut spans = Vec::new();
        for (index, pane) in panes.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            let style = if pane == self.report.pane {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(pane.title(), style));
        }

        Line::from(spans)
    }

    fn render_overview(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        ScoreGauge::new(self.report.result.score).render(f, rows[0]);

        let result = &self.report.result;
        let details = &result.details;
        let mut lines = Vec::new();
        if let Some(description) = &details.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }
        if !result.summary.is_empty() {
            lines.push(Line::from(result.summary.clone()));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "{} stars   {} forks   {} open issues",
                details.stars, details.forks, details.open_issues
            )),
        ]));
        if let Some(language) = &details.language {
            lines.push(Line::from(vec![
                Span::styled("Language  ", Style::default().fg(Color::Gray)),
                Span::raw(language.clone()),
            ]));
        }
        if let Some(tech_stack) = &result.tech_stack {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Tech stack",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            let tiers = [
                ("Backend", &tech_stack.backend),
                ("Frontend", &tech_stack.frontend),
                ("Infrastructure", &tech_stack.infrastructure),
            ];
            for (tier, technologies) in tiers {
                if technologies.is_empty() {
                    continue;
                }
                lines.push(Line::from(vec![
                    Span::styled(format!("{tier:>14}  "), Style::default().fg(Color::Gray)),
                    Span::raw(technologies.join(", ")),
                ]));
            }
        }

        let overview = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.report.scroll_offset, 0));
        f.render_widget(overview, rows[2]);
    }

    fn render_files(&self, f: &mut Frame, area: Rect) {
        if !self.report.has_files() {
            let empty = Paragraph::new("No file structure in this analysis.")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let rows = self.report.visible_file_rows();
        FileTree::new(&rows, self.report.file_cursor).render(f, area);
    }

    fn render_roadmap(&self, f: &mut Frame, area: Rect) {
        let items = &self.report.result.roadmap;
        if items.is_empty() {
            let empty = Paragraph::new("No roadmap suggestions in this analysis.")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let rows = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        let list_lines: Vec<Line> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = index == self.report.roadmap_cursor;
                let marker = if is_selected { "› " } else { "  " };
                let title_style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(
                        marker,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("[{}] ", item.category),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(item.title.clone(), title_style),
                ])
            })
            .collect();

        let visible_height = usize::from(rows[0].height);
        let scroll = if visible_height == 0 {
            0
        } else {
            self.report.roadmap_cursor.saturating_sub(visible_height - 1)
        };
        let list = Paragraph::new(list_lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        f.render_widget(list, rows[0]);

        let description = items
            .get(self.report.roadmap_cursor)
            .map(|item| item.description.clone())
            .unwrap_or_default();
        let details = Paragraph::new(description)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Details "));
        f.render_widget(details, rows[1]);
    }
}

impl Page for ReportPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        f.render_widget(Paragraph::new(self.pane_tabs_line()), chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Report: {} ", self.report.result.full_name()));
        let inner_area = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);

        match self.report.pane {
            ReportPane::Overview => self.render_overview(f, inner_area),
            ReportPane::Files => self.render_files(f, inner_area),
            ReportPane::Roadmap => self.render_roadmap(f, inner_area),
        }

        let actions = help_action::report_footer_actions(self.report.pane, self.is_authenticated);
        let help_message = Paragraph::new(help_action::footer_text(&actions))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, chunks[2]);
    }
}
