use std::time::Instant;

use crate::domain::input::InputState;

use super::help_action::HelpAction;
use super::login::LoginState;
use super::report::ReportState;

pub enum AppMode {
    List,
    UrlPrompt {
        input: InputState,
    },
    Analyzing {
        repo_url: String,
        started_at: Instant,
    },
    Report {
        report: ReportState,
    },
    Login {
        login: LoginState,
    },
    Confirmation {
        action: ConfirmAction,
        confirmation_message: String,
        confirmation_title: String,
        selected_confirmation_index: usize,
    },
    Help {
        context: HelpContext,
        scroll_offset: u16,
    },
}

/// What a confirmed [`AppMode::Confirmation`] overlay executes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfirmAction {
    DeleteAnalysis { analysis_id: String },
    Logout,
    Quit,
}

/// Captures which page opened the help overlay so it can be restored on close.
pub enum HelpContext {
    List {
        keybindings: Vec<HelpAction>,
    },
    Report {
        keybindings: Vec<HelpAction>,
        report: ReportState,
    },
}

impl HelpContext {
    /// Returns the projected keybinding entries for the originating page.
    pub fn keybindings(&self) -> &[HelpAction] {
        match self {
            HelpContext::List { keybindings } | HelpContext::Report { keybindings, .. } => {
                keybindings
            }
        }
    }

    /// Reconstructs the `AppMode` that was active before help was opened.
    pub fn restore_mode(self) -> AppMode {
        match self {
            HelpContext::List { .. } => AppMode::List,
            HelpContext::Report { report, .. } => AppMode::Report { report },
        }
    }

    /// Display title for the help overlay header.
    pub fn title(&self) -> &'static str {
        "Keybindings"
    }
}
