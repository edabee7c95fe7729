//! Report screen state over one stored analysis.

use crate::domain::analysis::AnalysisResult;
use crate::domain::tree::{ExpansionState, TreeNode, TreeRow, build_tree, visible_rows};

/// Panes of the report screen, cycled with `Tab`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReportPane {
    Overview,
    Files,
    Roadmap,
}

impl ReportPane {
    pub fn title(self) -> &'static str {
        match self {
            ReportPane::Overview => "Overview",
            ReportPane::Files => "Files",
            ReportPane::Roadmap => "Roadmap",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ReportPane::Overview => ReportPane::Files,
            ReportPane::Files => ReportPane::Roadmap,
            ReportPane::Roadmap => ReportPane::Overview,
        }
    }
}

/// State behind [`super::app_mode::AppMode::Report`].
///
/// The file forest is built once from the stored result; folder expansion
/// overrides live here so collapse state survives pane switches. Each pane
/// keeps its own cursor or scroll position.
pub struct ReportState {
    pub analysis_id: String,
    pub expansion: ExpansionState,
    pub file_cursor: usize,
    pub pane: ReportPane,
    pub result: AnalysisResult,
    pub roadmap_cursor: usize,
    pub scroll_offset: u16,
    tree: Vec<TreeNode>,
}

impl ReportState {
    pub fn new(analysis_id: String, result: AnalysisResult) -> Self {
        let tree = result
            .file_structure
            .as_deref()
            .map(build_tree)
            .unwrap_or_default();

        Self {
            analysis_id,
            expansion: ExpansionState::new(),
            file_cursor: 0,
            pane: ReportPane::Overview,
            result,
            roadmap_cursor: 0,
            scroll_offset: 0,
            tree,
        }
    }

    /// Returns whether the analysis came with a file listing.
    pub fn has_files(&self) -> bool {
        !self.tree.is_empty()
    }

    /// Flattens the forest into the rows currently visible in the Files pane.
    pub fn visible_file_rows(&self) -> Vec<TreeRow> {
        visible_rows(&self.tree, &self.expansion)
    }

    pub fn next_pane(&mut self) {
        self.pane = self.pane.next();
    }

    pub fn select_next_file(&mut self) {
        let row_count = self.visible_file_rows().len();
        if row_count == 0 {
            return;
        }
        self.file_cursor = (self.file_cursor + 1).min(row_count - 1);
    }

    pub fn select_previous_file(&mut self) {
        self.file_cursor = self.file_cursor.saturating_sub(1);
    }

    /// Toggles the folder under the Files cursor. File rows are ignored. The
    /// cursor is clamped afterwards since collapsing can shorten the list.
    pub fn toggle_selected_folder(&mut self) {
        let rows = self.visible_file_rows();
        let Some(row) = rows.get(self.file_cursor) else {
            return;
        };
        if !row.is_folder {
            return;
        }
        self.expansion.toggle(&row.path, row.depth);

        let row_count = self.visible_file_rows().len();
        self.file_cursor = self.file_cursor.min(row_count.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn next_roadmap_item(&mut self) {
        let item_count = self.result.roadmap.len();
        if item_count == 0 {
            return;
        }
        self.roadmap_cursor = (self.roadmap_cursor + 1).min(item_count - 1);
    }

    pub fn previous_roadmap_item(&mut self) {
        self.roadmap_cursor = self.roadmap_cursor.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{RepoDetails, RoadmapItem};

    fn sample_result(file_structure: Option<Vec<String>>) -> AnalysisResult {
        AnalysisResult {
            details: RepoDetails {
                description: None,
                forks: 0,
                language: Some("Rust".to_string()),
                name: "demo".to_string(),
                open_issues: 0,
                owner: "acme".to_string(),
                stars: 3,
            },
            file_structure,
            roadmap: vec![
                RoadmapItem {
                    category: "Testing".to_string(),
                    description: "Add integration tests".to_string(),
                    title: "Test coverage".to_string(),
                },
                RoadmapItem {
                    category: "Docs".to_string(),
                    description: "Write a README".to_string(),
                    title: "Documentation".to_string(),
                },
            ],
            score: 55.0,
            summary: "Average".to_string(),
            tech_stack: None,
        }
    }

    fn sample_report() -> ReportState {
        ReportState::new(
            "a-1".to_string(),
            sample_result(Some(vec![
                "src/main.rs".to_string(),
                "src/lib.rs".to_string(),
                "README.md".to_string(),
            ])),
        )
    }

    #[test]
    fn test_new_builds_tree_and_starts_on_overview() {
        // Act
        let report = sample_report();

        // Assert
        assert_eq!(report.pane, ReportPane::Overview);
        assert!(report.has_files());
        let rows = report.visible_file_rows();
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["src", "lib.rs", "main.rs", "README.md"]);
    }

    #[test]
    fn test_new_without_file_structure_has_no_rows() {
        // Act
        let report = ReportState::new("a-1".to_string(), sample_result(None));

        // Assert
        assert!(!report.has_files());
        assert!(report.visible_file_rows().is_empty());
    }

    #[test]
    fn test_toggle_selected_folder_hides_its_subtree() {
        // Arrange
        let mut report = sample_report();
        assert_eq!(report.visible_file_rows().len(), 4);

        // Act
        report.toggle_selected_folder();

        // Assert
        let names: Vec<String> = report
            .visible_file_rows()
            .into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["src", "README.md"]);
    }

    #[test]
    fn test_toggle_on_file_row_is_ignored() {
        // Arrange
        let mut report = sample_report();
        report.select_next_file();

        // Act
        report.toggle_selected_folder();

        // Assert
        assert_eq!(report.visible_file_rows().len(), 4);
    }

    #[test]
    fn test_collapse_clamps_file_cursor() {
        // Arrange
        let mut report = sample_report();
        report.file_cursor = 3;
        report.expansion.toggle("src", 0);

        // Act
        report.select_next_file();

        // Assert: only "src" and "README.md" remain visible.
        assert_eq!(report.file_cursor, 1);
    }

    #[test]
    fn test_pane_cycle_returns_to_overview() {
        // Arrange
        let mut report = sample_report();

        // Act + Assert
        report.next_pane();
        assert_eq!(report.pane, ReportPane::Files);
        report.next_pane();
        assert_eq!(report.pane, ReportPane::Roadmap);
        report.next_pane();
        assert_eq!(report.pane, ReportPane::Overview);
    }

    #[test]
    fn test_roadmap_cursor_clamps_at_both_ends() {
        // Arrange
        let mut report = sample_report();

        // Act + Assert
        report.previous_roadmap_item();
        assert_eq!(report.roadmap_cursor, 0);
        report.next_roadmap_item();
        report.next_roadmap_item();
        report.next_roadmap_item();
        assert_eq!(report.roadmap_cursor, 1);
    }
}
