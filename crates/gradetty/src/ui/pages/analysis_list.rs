use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use time::OffsetDateTime;

use crate::domain::analysis::{AnalysisSummary, ScoreBand};
use crate::ui::Page;
use crate::ui::layout::first_table_column_width;
use crate::ui::state::help_action;
use crate::ui::text_util::truncate_with_ellipsis;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const TABLE_COLUMN_SPACING: u16 = 1;

const HERO_DESCRIPTION: &str = "AI-driven repository quality analysis";
const HERO_START_BUTTON: &str = "[ Press a to analyze a repository ]";
const HERO_LOGO_LINES: [&str; 5] = [
    "  ____  ____      _     ____   _____  _____  _____ __   __",
    " / ___||  _ \\    / \\   |  _ \\ | ____||_   _||_   _|\\ \\ / /",
    "| |  _ | |_) |  / _ \\  | | | ||  _|    | |    | |   \\ V / ",
    "| |_| ||  _ <  / ___ \\ | |_| || |___   | |    | |    | |  ",
    " \\____||_| \\_\\/_/   \\_\\|____/ |_____|  |_|    |_|    |_|  ",
];

/// Analysis history page renderer.
pub struct AnalysisListPage<'a> {
    pub analyses: &'a [AnalysisSummary],
    pub table_state: &'a mut TableState,
}

impl<'a> AnalysisListPage<'a> {
    /// Creates an analysis history page renderer.
    pub fn new(analyses: &'a [AnalysisSummary], table_state: &'a mut TableState) -> Self {
        Self {
            analyses,
            table_state,
        }
    }

    /// Renders the onboarding hero shown while the history is empty.
    fn render_hero(f: &mut Frame, area: Rect) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        let logo_width = saturating_u16(
            HERO_LOGO_LINES
                .iter()
                .map(|line| line.len())
                .max()
                .unwrap_or(0),
        );
        let content_width = logo_width
            .max(saturating_u16(HERO_DESCRIPTION.len()))
            .max(saturating_u16(HERO_START_BUTTON.len()));
        let content_height = saturating_u16(HERO_LOGO_LINES.len() + 6);

        let vertical_chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(area);
        let horizontal_chunks = Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(content_width),
                Constraint::Min(0),
            ])
            .split(vertical_chunks[1]);

        let mut lines = Vec::with_capacity(HERO_LOGO_LINES.len() + 6);
        lines.extend(HERO_LOGO_LINES.iter().map(|line| {
            Line::from(Span::styled(
                *line,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            version,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(HERO_DESCRIPTION));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            HERO_START_BUTTON,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        let hero = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(hero, horizontal_chunks[1]);
    }
}

impl Page for AnalysisListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let main_area = chunks[0];
        let footer_area = chunks[1];

        if self.analyses.is_empty() {
            Self::render_hero(f, main_area);
        } else {
            let selected_style = Style::default().bg(Color::DarkGray);
            let normal_style = Style::default().bg(Color::Gray).fg(Color::Black);
            let header_cells = ["Repository", "Owner", "Score", "Language", "Age"]
                .iter()
                .map(|h| Cell::from(*h));
            let header = Row::new(header_cells)
                .style(normal_style)
                .height(1)
                .bottom_margin(1);

            let block = Block::default().borders(Borders::ALL).title("Analyses");
            let column_constraints = [
                Constraint::Min(0),
                owner_column_width(self.analyses),
                score_column_width(),
                language_column_width(self.analyses),
                age_column_width(),
            ];
            let has_selection = self.table_state.selected().is_some();
            let selection_width = if has_selection {
                u16::try_from(ROW_HIGHLIGHT_SYMBOL.chars().count()).unwrap_or(u16::MAX)
            } else {
                0
            };
            let repository_column_width = first_table_column_width(
                block.inner(main_area).width,
                &column_constraints,
                TABLE_COLUMN_SPACING,
                selection_width,
            );
            let rows = self.analyses.iter().map(|analysis| {
                let band = ScoreBand::for_score(analysis.score);
                let repo_name =
                    truncate_with_ellipsis(&analysis.repo_name, repository_column_width);
                let cells = vec![
                    Cell::from(repo_name),
                    Cell::from(analysis.owner.clone()),
                    Cell::from(format!("{:.1}", analysis.score))
                        .style(Style::default().fg(band.color())),
                    Cell::from(analysis.language.clone().unwrap_or_default()),
                    Cell::from(format_age(analysis.created_at)),
                ];
                Row::new(cells).height(1)
            });
            let table = Table::new(rows, column_constraints)
                .column_spacing(TABLE_COLUMN_SPACING)
                .header(header)
                .block(block)
                .row_highlight_style(selected_style)
                .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

            f.render_stateful_widget(table, main_area, self.table_state);
        }

        let can_open = !self.analyses.is_empty() && self.table_state.selected().is_some();
        let actions = help_action::analysis_list_footer_actions(can_open);
        let help_message = Paragraph::new(help_action::footer_text(&actions))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}

pub(crate) fn owner_column_width(analyses: &[AnalysisSummary]) -> Constraint {
    text_column_width(
        "Owner",
        analyses.iter().map(|analysis| analysis.owner.as_str()),
    )
}

pub(crate) fn language_column_width(analyses: &[AnalysisSummary]) -> Constraint {
    text_column_width(
        "Language",
        analyses
            .iter()
            .map(|analysis| analysis.language.as_deref().unwrap_or("")),
    )
}

fn score_column_width() -> Constraint {
    text_column_width("Score", ["100.0"].into_iter())
}

fn age_column_width() -> Constraint {
    text_column_width("Age", ["999d ago"].into_iter())
}

/// Formats an analysis timestamp as a coarse relative age.
fn format_age(created_at: i64) -> String {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let elapsed_seconds = now.saturating_sub(created_at).max(0);

    if elapsed_seconds < 60 {
        "just now".to_string()
    } else if elapsed_seconds < 3600 {
        format!("{}m ago", elapsed_seconds / 60)
    } else if elapsed_seconds < 86400 {
        format!("{}h ago", elapsed_seconds / 3600)
    } else {
        format!("{}d ago", elapsed_seconds / 86400)
    }
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn text_column_width<T>(header: &str, values: impl Iterator<Item = T>) -> Constraint
where
    T: AsRef<str>,
{
    let column_width = values
        .map(|value| value.as_ref().chars().count())
        .fold(header.chars().count(), usize::max);
    let column_width = u16::try_from(column_width).unwrap_or(u16::MAX);

    Constraint::Length(column_width)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn sample_summary(id: &str, repo_name: &str, score: f64) -> AnalysisSummary {
        AnalysisSummary {
            created_at: OffsetDateTime::now_utc().unix_timestamp() - 7200,
            id: id.to_string(),
            language: Some("Rust".to_string()),
            owner: "acme".to_string(),
            repo_name: repo_name.to_string(),
            score,
            summary: "Solid project".to_string(),
        }
    }

    fn render_to_text(analyses: &[AnalysisSummary], table_state: &mut TableState) -> String {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                AnalysisListPage::new(analyses, table_state).render(f, area);
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
    fn test_analysis_list_render_shows_rows() {
        // Arrange
        let analyses = vec![
            sample_summary("a-1", "demo", 84.0),
            sample_summary("a-2", "widget", 42.5),
        ];
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        // Act
        let text = render_to_text(&analyses, &mut table_state);

        // Assert
        assert!(text.contains("demo"));
        assert!(text.contains("widget"));
        assert!(text.contains("acme"));
        assert!(text.contains("84.0"));
        assert!(text.contains("2h ago"));
        assert!(text.contains("Enter: open"));
    }

    #[test]
    fn test_analysis_list_render_shows_hero_when_empty() {
        // Arrange
        let mut table_state = TableState::default();

        // Act
        let text = render_to_text(&[], &mut table_state);

        // Assert
        assert!(text.contains(HERO_DESCRIPTION));
        assert!(text.contains(HERO_START_BUTTON));
        assert!(!text.contains("Enter: open"));
    }

    #[test]
    fn test_owner_column_width_uses_longest_owner_value() {
        // Arrange
        let analyses = vec![
            sample_summary("a-1", "demo", 84.0),
            AnalysisSummary {
                owner: "a-much-longer-owner".to_string(),
                ..sample_summary("a-2", "widget", 42.5)
            },
        ];
        let expected_width =
            u16::try_from("a-much-longer-owner".chars().count()).unwrap_or(u16::MAX);

        // Act
        let width = owner_column_width(&analyses);

        // Assert
        assert_eq!(width, Constraint::Length(expected_width));
    }

    #[test]
    fn test_language_column_width_falls_back_to_header() {
        // Arrange
        let analyses = vec![AnalysisSummary {
            language: None,
            ..sample_summary("a-1", "demo", 84.0)
        }];
        let expected_width = u16::try_from("Language".chars().count()).unwrap_or(u16::MAX);

        // Act
        let width = language_column_width(&analyses);

        // Assert
        assert_eq!(width, Constraint::Length(expected_width));
    }

    #[test]
    fn test_format_age_buckets() {
        // Arrange
        let now = OffsetDateTime::now_utc().unix_timestamp();

        // Act & Assert
        assert_eq!(format_age(now), "just now");
        assert_eq!(format_age(now - 120), "2m ago");
        assert_eq!(format_age(now - 7200), "2h ago");
        assert_eq!(format_age(now - 172_800), "2d ago");
    }
}
