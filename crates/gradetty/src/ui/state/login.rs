//! Login screen state for the paste-code sign-in flow.

use crate::domain::input::InputState;

/// Where the sign-in flow currently is.
pub enum LoginPhase {
    /// Waiting for the user to paste the authorization code.
    EnterCode,
    /// The code exchange request is in flight.
    Exchanging,
    /// The backend rejected the previous code; the input stays editable for
    /// another attempt.
    Failed { message: String },
}

/// State behind [`super::app_mode::AppMode::Login`].
pub struct LoginState {
    /// Browser URL of the Google consent page, when a client id is
    /// configured.
    pub auth_url: Option<String>,
    pub input: InputState,
    pub phase: LoginPhase,
}

impl LoginState {
    pub fn new(auth_url: Option<String>) -> Self {
        Self {
            auth_url,
            input: InputState::new(),
            phase: LoginPhase::EnterCode,
        }
    }

    pub fn begin_exchange(&mut self) {
        self.phase = LoginPhase::Exchanging;
    }

    pub fn fail(&mut self, message: String) {
        self.phase = LoginPhase::Failed { message };
    }

    pub fn is_exchanging(&self) -> bool {
        matches!(self.phase, LoginPhase::Exchanging)
    }
}
