use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::app::{SupportManager, Tab};
use crate::domain::analysis::{AnalysisSummary, User};
use crate::ui::state::app_mode::AppMode;
use crate::ui::{Component, Page, RenderContext, components, overlays, pages};

/// Shared borrowed data required to render list-page backgrounds.
pub(crate) struct ListBackgroundRenderContext<'a> {
    pub(crate) analyses: &'a [AnalysisSummary],
    pub(crate) current_tab: Tab,
    pub(crate) current_user: Option<&'a User>,
    pub(crate) is_authenticated: bool,
    pub(crate) support: &'a SupportManager,
    pub(crate) table_state: &'a mut TableState,
}

/// Shared mutable routing data reused across app modes in `route_frame`.
struct RouteSharedContext<'a> {
    analyses: &'a [AnalysisSummary],
    current_tab: Tab,
    current_user: Option<&'a User>,
    is_authenticated: bool,
    support: &'a SupportManager,
    table_state: &'a mut TableState,
}

impl RouteSharedContext<'_> {
    /// Creates a list-background context for overlays/pages that render on top
    /// of the tabbed list content.
    fn list_background(&mut self) -> ListBackgroundRenderContext<'_> {
        ListBackgroundRenderContext {
            analyses: self.analyses,
            current_tab: self.current_tab,
            current_user: self.current_user,
            is_authenticated: self.is_authenticated,
            support: self.support,
            table_state: self.table_state,
        }
    }
}

/// Routes the content-area render path by active `AppMode`.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, context: RenderContext<'_>) {
    let RenderContext {
        analyses,
        current_tab,
        current_user,
        is_authenticated,
        mode,
        support,
        table_state,
        ..
    } = context;

    let mut shared = RouteSharedContext {
        analyses,
        current_tab,
        current_user,
        is_authenticated,
        support,
        table_state,
    };

    if render_list_or_overlay_mode(f, area, mode, &mut shared) {
        return;
    }

    render_workflow_mode(f, area, mode, shared.is_authenticated);
}

/// Renders all list/overlay-driven modes and returns whether it handled `mode`.
fn render_list_or_overlay_mode(
    f: &mut Frame,
    area: Rect,
    mode: &AppMode,
    shared: &mut RouteSharedContext<'_>,
) -> bool {
    match mode {
        AppMode::List => render_list_background(f, area, shared.list_background()),
        AppMode::Confirmation { .. } => {
            overlays::render_confirmation_overlay(f, area, mode, shared.list_background());
        }
        AppMode::Help {
            context: help_context,
            scroll_offset,
        } => overlays::render_help(f, area, help_context, *scroll_offset, shared.list_background()),
        AppMode::UrlPrompt { .. }
        | AppMode::Analyzing { .. }
        | AppMode::Report { .. }
        | AppMode::Login { .. } => {
            return false;
        }
    }

    true
}

/// Renders the full-screen analyze, report, and login workflow modes.
fn render_workflow_mode(f: &mut Frame, area: Rect, mode: &AppMode, is_authenticated: bool) {
    match mode {
        AppMode::UrlPrompt { input } => {
            pages::url_prompt::UrlPromptPage::new(input).render(f, area);
        }
        AppMode::Analyzing {
            repo_url,
            started_at,
        } => {
            pages::analyzing::AnalyzingPage::new(repo_url, *started_at).render(f, area);
        }
        AppMode::Report { report } => {
            pages::report::ReportPage::new(is_authenticated, report).render(f, area);
        }
        AppMode::Login { login } => {
            pages::login::LoginPage::new(login).render(f, area);
        }
        AppMode::List | AppMode::Confirmation { .. } | AppMode::Help { .. } => {}
    }
}

/// Renders base list tabs and the currently selected list tab content.
pub(crate) fn render_list_background(
    f: &mut Frame,
    content_area: Rect,
    context: ListBackgroundRenderContext<'_>,
) {
    let ListBackgroundRenderContext {
        analyses,
        current_tab,
        current_user,
        is_authenticated,
        support,
        table_state,
    } = context;

    let chunks = Layout::default()
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(content_area);

    components::tab::Tabs::new(current_tab).render(f, chunks[0]);

    match current_tab {
        Tab::Analyses => {
            pages::analysis_list::AnalysisListPage::new(analyses, table_state).render(f, chunks[1]);
        }
        Tab::Account => {
            pages::account::AccountPage::new(current_user, is_authenticated).render(f, chunks[1]);
        }
        Tab::Support => {
            pages::support::SupportPage::new(support).render(f, chunks[1]);
        }
    }
}
