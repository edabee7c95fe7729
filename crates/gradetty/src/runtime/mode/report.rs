use std::mem;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};
use crate::ui::state::help_action::report_actions;
use crate::ui::state::report::ReportPane;

/// Handles key input while a report is on screen.
///
/// `j`/`k` act on the active pane: they scroll the overview, move the file
/// cursor, or move the roadmap cursor.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('?') {
        open_report_help_overlay(app);

        return EventResult::Continue;
    }
    if key.code == KeyCode::Char('e') {
        email_report(app);

        return EventResult::Continue;
    }

    let AppMode::Report { report } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.mode = AppMode::List;
        }
        KeyCode::Tab => report.next_pane(),
        KeyCode::Char('j') | KeyCode::Down => match report.pane {
            ReportPane::Overview => report.scroll_down(),
            ReportPane::Files => report.select_next_file(),
            ReportPane::Roadmap => report.next_roadmap_item(),
        },
        KeyCode::Char('k') | KeyCode::Up => match report.pane {
            ReportPane::Overview => report.scroll_up(),
            ReportPane::Files => report.select_previous_file(),
            ReportPane::Roadmap => report.previous_roadmap_item(),
        },
        KeyCode::Enter | KeyCode::Char(' ') if report.pane == ReportPane::Files => {
            report.toggle_selected_folder();
        }
        _ => {}
    }

    EventResult::Continue
}

/// Asks the backend to email the report currently on screen.
fn email_report(app: &mut App) {
    let AppMode::Report { report } = &app.mode else {
        return;
    };
    let analysis = report.result.clone();

    match app.send_report(analysis) {
        Ok(()) => app.show_info("Sending report".to_string()),
        Err(err) => app.show_error(err),
    }
}

/// Opens the help overlay, parking the report state so `q` can restore it.
fn open_report_help_overlay(app: &mut App) {
    let is_authenticated = app.auth.is_authenticated();

    match mem::replace(&mut app.mode, AppMode::List) {
        AppMode::Report { report } => {
            let keybindings = report_actions(report.pane, is_authenticated);
            app.mode = AppMode::Help {
                context: HelpContext::Report { keybindings, report },
                scroll_offset: 0,
            };
        }
        other => app.mode = other,
    }
}
