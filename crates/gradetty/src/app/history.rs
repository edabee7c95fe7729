//! Stored-analysis list state behind the Analyses tab.

use ratatui::widgets::TableState;

use crate::app::AppServices;
use crate::domain::analysis::AnalysisSummary;
use crate::infra::db::AnalysisRow;

/// Analyses loaded from the local database, newest first, plus the table
/// cursor over them.
pub struct HistoryManager {
    pub analyses: Vec<AnalysisSummary>,
    pub table_state: TableState,
}

impl HistoryManager {
    pub(crate) fn new(analyses: Vec<AnalysisSummary>) -> Self {
        let mut table_state = TableState::default();
        if !analyses.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            analyses,
            table_state,
        }
    }

    /// Moves the cursor down, wrapping at the end of the list.
    pub fn next(&mut self) {
        if self.analyses.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= self.analyses.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Moves the cursor up, wrapping at the top of the list.
    pub fn previous(&mut self) {
        if self.analyses.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.analyses.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_analysis(&self) -> Option<&AnalysisSummary> {
        self.table_state
            .selected()
            .and_then(|i| self.analyses.get(i))
    }

    /// Reloads the list from the database, keeping the cursor on the same
    /// analysis when it still exists.
    pub(crate) async fn reload(&mut self, services: &AppServices) -> Result<(), String> {
        let selected_id = self
            .selected_analysis()
            .map(|analysis| analysis.id.clone());
        let rows = services.db().load_analyses().await?;
        self.analyses = rows.into_iter().map(summary_from_row).collect();

        let selection = selected_id
            .and_then(|id| self.analyses.iter().position(|analysis| analysis.id == id))
            .or_else(|| {
                self.table_state
                    .selected()
                    .map(|i| i.min(self.analyses.len().saturating_sub(1)))
            })
            .unwrap_or(0);
        if self.analyses.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(selection));
        }
        Ok(())
    }
}

fn summary_from_row(row: AnalysisRow) -> AnalysisSummary {
    AnalysisSummary {
        created_at: row.created_at,
        id: row.id,
        language: row.language,
        owner: row.owner,
        repo_name: row.repo_name,
        score: row.score,
        summary: row.summary,
    }
}
