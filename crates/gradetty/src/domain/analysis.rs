//! Analysis payloads returned by the grading backend, plus score banding.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Full analysis produced for one repository.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Repository metadata echoed back by the backend.
    pub details: RepoDetails,
    /// Flat slash-delimited paths describing the repository layout.
    #[serde(default)]
    pub file_structure: Option<Vec<String>>,
    /// Suggested improvements, in backend order.
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
    /// Overall quality score on a 0 to 100 scale.
    pub score: f64,
    /// Short prose assessment of the repository.
    #[serde(default)]
    pub summary: String,
    /// Detected technology stack, when the backend could infer one.
    #[serde(default)]
    pub tech_stack: Option<TechStack>,
}

/// Repository metadata included with every analysis.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RepoDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub forks: i64,
    #[serde(default)]
    pub language: Option<String>,
    pub name: String,
    #[serde(default)]
    pub open_issues: i64,
    pub owner: String,
    #[serde(default)]
    pub stars: i64,
}

/// One suggested improvement from the analysis roadmap.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RoadmapItem {
    pub category: String,
    pub description: String,
    pub title: String,
}

/// Technologies detected in the repository, grouped by tier.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TechStack {
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub infrastructure: Vec<String>,
}

/// Authenticated account as reported by the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// One stored analysis as shown in the history list.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisSummary {
    pub created_at: i64,
    pub id: String,
    pub language: Option<String>,
    pub owner: String,
    pub repo_name: String,
    pub score: f64,
    pub summary: String,
}

impl AnalysisSummary {
    /// Returns `owner/name` for list rows and titles.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

/// Qualitative band a score falls into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    /// Maps a 0 to 100 score onto its band. Thresholds are inclusive at
    /// 80, 60, and 40.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsWork
        }
    }

    /// Returns the band's display label.
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }

    /// Returns the accent color used wherever the band is shown.
    pub fn color(self) -> Color {
        match self {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::Yellow,
            ScoreBand::Fair => Color::LightRed,
            ScoreBand::NeedsWork => Color::Red,
        }
    }
}

impl AnalysisResult {
    /// Returns `owner/name` for list rows and titles.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.details.owner, self.details.name)
    }
}
