use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::app::{Notice, SupportManager, Tab};
use crate::domain::analysis::{AnalysisSummary, User};
use crate::ui::state::app_mode::AppMode;
use crate::ui::{components, router};

/// Rendering interface for full-screen pages. Pages may mutate their own
/// widget state (table cursors) while drawing.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Rendering interface for reusable widgets that draw from shared state.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Everything one frame needs, borrowed from [`crate::app::App`] per draw.
pub struct RenderContext<'a> {
    pub analyses: &'a [AnalysisSummary],
    pub api_base_url: &'a str,
    pub current_tab: Tab,
    pub current_user: Option<&'a User>,
    pub is_authenticated: bool,
    pub mode: &'a AppMode,
    pub notice: Option<&'a Notice>,
    pub support: &'a SupportManager,
    pub table_state: &'a mut TableState,
}

/// Draws one frame: status line on top, footer line at the bottom, and the
/// mode-routed content between them.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let [status_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    components::status_bar::StatusBar::new(version_line())
        .notice(
            context
                .notice
                .map(|notice| (notice.level, notice.message.clone())),
        )
        .render(f, status_area);
    components::footer_bar::FooterBar::new(context.api_base_url.to_string())
        .account_email(context.current_user.map(|user| user.email.clone()))
        .render(f, footer_area);

    router::route_frame(f, content_area, context);
}

fn version_line() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
