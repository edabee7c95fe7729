use ratatui::Frame;
use ratatui::layout::Rect;

use crate::ui::router::{ListBackgroundRenderContext, render_list_background};
use crate::ui::state::app_mode::{AppMode, HelpContext};
use crate::ui::{Component, Page, components, pages};

/// Renders the list background and generic confirmation overlay.
pub(crate) fn render_confirmation_overlay(
    f: &mut Frame,
    area: Rect,
    mode: &AppMode,
    list_background: ListBackgroundRenderContext<'_>,
) {
    render_list_background(f, area, list_background);

    let AppMode::Confirmation {
        confirmation_message,
        confirmation_title,
        selected_confirmation_index,
        ..
    } = mode
    else {
        unreachable!("matched confirmation mode above");
    };

    components::confirmation_overlay::ConfirmationOverlay::new(
        confirmation_title,
        confirmation_message,
        *selected_confirmation_index == 0,
    )
    .render(f, area);
}

/// Draws the help popup over whichever page opened it.
///
/// The backdrop matters: report help keeps the report visible behind the
/// popup so pane-specific shortcuts stay in context.
pub(crate) fn render_help(
    f: &mut Frame,
    area: Rect,
    help_context: &HelpContext,
    scroll_offset: u16,
    list_background: ListBackgroundRenderContext<'_>,
) {
    match help_context {
        HelpContext::List { .. } => {
            render_list_background(f, area, list_background);
        }
        HelpContext::Report { report, .. } => {
            pages::report::ReportPage::new(list_background.is_authenticated, report)
                .render(f, area);
        }
    }

    components::help_overlay::HelpOverlay::new(help_context, scroll_offset).render(f, area);
}
