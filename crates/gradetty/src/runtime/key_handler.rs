use std::io;

use crossterm::event::KeyEvent;

use crate::app::{App, Tab};
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) async fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<EventResult> {
    match &app.mode {
        AppMode::List => mode::list::handle(app, key).await,
        AppMode::UrlPrompt { .. } => Ok(mode::url_prompt::handle(app, key)),
        // An in-flight analysis cannot be cancelled; failures fall back to
        // the URL prompt through app events.
        AppMode::Analyzing { .. } => Ok(EventResult::Continue),
        AppMode::Report { .. } => Ok(mode::report::handle(app, key)),
        AppMode::Login { .. } => Ok(mode::login::handle(app, key)),
        AppMode::Confirmation { .. } => mode::confirmation::handle(app, key).await,
        AppMode::Help { .. } => Ok(mode::help::handle(app, key)),
    }
}

/// Routes bracketed-paste text into whichever input currently has focus.
pub(crate) fn handle_paste(app: &mut App, pasted: &str) {
    match &mut app.mode {
        AppMode::UrlPrompt { input } => input.insert_text(pasted),
        AppMode::Login { login } if !login.is_exchanging() => login.input.insert_text(pasted),
        AppMode::List => {
            if app.current_tab == Tab::Support && app.support.is_editing_message {
                app.support.message.insert_text(pasted);
            }
        }
        _ => {}
    }
}
