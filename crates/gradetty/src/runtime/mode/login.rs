use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the Google sign-in screen is open.
///
/// All editing keys are ignored while a pasted code is being exchanged so the
/// in-flight request cannot be resubmitted.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Login { login } = &mut app.mode else {
        return EventResult::Continue;
    };

    if key.code == KeyCode::Esc {
        app.mode = AppMode::List;

        return EventResult::Continue;
    }
    if login.is_exchanging() {
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Enter => {
            let code = login.input.take_text().trim().to_string();
            if code.is_empty() {
                return EventResult::Continue;
            }

            login.begin_exchange();
            app.submit_login_code(code);
        }
        KeyCode::Backspace => login.input.delete_backward(),
        KeyCode::Delete => login.input.delete_forward(),
        KeyCode::Left => login.input.move_left(),
        KeyCode::Right => login.input.move_right(),
        KeyCode::Home => login.input.move_home(),
        KeyCode::End => login.input.move_end(),
        KeyCode::Char(character) if is_text_key(key) => login.input.insert_char(character),
        _ => {}
    }

    EventResult::Continue
}

/// Returns whether a key event should insert text into the code input.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}
