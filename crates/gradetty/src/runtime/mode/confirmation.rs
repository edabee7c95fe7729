use std::io;
use std::mem;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, ConfirmAction};

const YES_OPTION_INDEX: usize = 0;
const NO_OPTION_INDEX: usize = 1;

/// Option index a confirmation dialog opens on (the safe "No" choice).
pub(crate) const DEFAULT_OPTION_INDEX: usize = NO_OPTION_INDEX;

/// Describes how the confirmation selector should react to a pressed key.
enum ConfirmationDecision {
    Confirm,
    Cancel,
    Continue,
}

/// Handles key input while a confirmation dialog is visible.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> io::Result<EventResult> {
    let decision = match &mut app.mode {
        AppMode::Confirmation {
            selected_confirmation_index,
            ..
        } => decide(selected_confirmation_index, key),
        _ => return Ok(EventResult::Continue),
    };

    match decision {
        ConfirmationDecision::Confirm => run_confirmed_action(app).await,
        ConfirmationDecision::Cancel => {
            app.mode = AppMode::List;

            Ok(EventResult::Continue)
        }
        ConfirmationDecision::Continue => Ok(EventResult::Continue),
    }
}

/// Maps shared confirmation keys (`y/n/q`, arrows, `h/l`, `Esc`, `Enter`) to
/// a decision for a yes/no selector.
fn decide(selected_confirmation_index: &mut usize, key: KeyEvent) -> ConfirmationDecision {
    match key.code {
        KeyCode::Char(character) if is_yes_shortcut(character) => ConfirmationDecision::Confirm,
        KeyCode::Char(character) if is_no_shortcut(character) => ConfirmationDecision::Cancel,
        KeyCode::Esc => ConfirmationDecision::Cancel,
        KeyCode::Left => {
            *selected_confirmation_index = selected_confirmation_index.saturating_sub(1);

            ConfirmationDecision::Continue
        }
        KeyCode::Char(character) if is_left_shortcut(character) => {
            *selected_confirmation_index = selected_confirmation_index.saturating_sub(1);

            ConfirmationDecision::Continue
        }
        KeyCode::Right => {
            *selected_confirmation_index = (*selected_confirmation_index + 1).min(NO_OPTION_INDEX);

            ConfirmationDecision::Continue
        }
        KeyCode::Char(character) if is_right_shortcut(character) => {
            *selected_confirmation_index = (*selected_confirmation_index + 1).min(NO_OPTION_INDEX);

            ConfirmationDecision::Continue
        }
        KeyCode::Enter => {
            if *selected_confirmation_index == YES_OPTION_INDEX {
                ConfirmationDecision::Confirm
            } else {
                ConfirmationDecision::Cancel
            }
        }
        _ => ConfirmationDecision::Continue,
    }
}

async fn run_confirmed_action(app: &mut App) -> io::Result<EventResult> {
    let action = match mem::replace(&mut app.mode, AppMode::List) {
        AppMode::Confirmation { action, .. } => action,
        other => {
            app.mode = other;
            return Ok(EventResult::Continue);
        }
    };

    match action {
        ConfirmAction::Quit => return Ok(EventResult::Quit),
        ConfirmAction::DeleteAnalysis { analysis_id } => {
            if let Err(err) = app.delete_analysis(&analysis_id).await {
                app.show_error(err);
            }
        }
        ConfirmAction::Logout => match app.logout() {
            Ok(()) => app.show_info("Signed out".to_string()),
            Err(err) => app.show_error(err),
        },
    }

    Ok(EventResult::Continue)
}

/// Returns whether the pressed key should confirm the action.
fn is_yes_shortcut(character: char) -> bool {
    character.eq_ignore_ascii_case(&'y')
}

/// Returns whether the pressed key should cancel the action.
fn is_no_shortcut(character: char) -> bool {
    character.eq_ignore_ascii_case(&'n') || character.eq_ignore_ascii_case(&'q')
}

/// Returns whether the pressed key should move selection to the left option.
fn is_left_shortcut(character: char) -> bool {
    character.eq_ignore_ascii_case(&'h')
}

/// Returns whether the pressed key should move selection to the right option.
fn is_right_shortcut(character: char) -> bool {
    character.eq_ignore_ascii_case(&'l')
}
