use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the analyze-URL prompt is open.
///
/// `Enter` with a non-empty URL starts the analysis and switches to the
/// progress screen. `Esc` returns to the list without submitting.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::UrlPrompt { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Enter => {
            let repo_url = input.take_text().trim().to_string();
            if repo_url.is_empty() {
                return EventResult::Continue;
            }

            app.submit_analysis(repo_url.clone());
            app.mode = AppMode::Analyzing {
                repo_url,
                started_at: Instant::now(),
            };
        }
        KeyCode::Esc => {
            app.mode = AppMode::List;
        }
        KeyCode::Backspace => input.delete_backward(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(character) if is_text_key(key) => input.insert_char(character),
        _ => {}
    }

    EventResult::Continue
}

/// Returns whether a key event should insert text into the URL input.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}
