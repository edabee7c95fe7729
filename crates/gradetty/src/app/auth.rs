//! In-memory view of the signed-in session.

use crate::domain::analysis::User;
use crate::infra::auth_store::StoredSession;

/// Holds the current session, if any.
///
/// The manager never touches disk itself; [`crate::app::App`] loads the
/// persisted session at startup and clears it on logout.
pub struct AuthManager {
    session: Option<StoredSession>,
}

impl AuthManager {
    pub(crate) fn new(session: Option<StoredSession>) -> Self {
        Self { session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the profile reported by the backend at login, when it sent one.
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|session| session.user.as_ref())
    }

    /// Bearer token for authenticated requests.
    pub fn access_token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.access_token.as_str())
    }

    pub(crate) fn apply_login(&mut self, access_token: String, user: Option<User>) {
        self.session = Some(StoredSession { access_token, user });
    }

    pub(crate) fn apply_logout(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout_round_trip() {
        // Arrange
        let mut auth = AuthManager::new(None);
        assert!(!auth.is_authenticated());

        // Act
        auth.apply_login(
            "token-1".to_string(),
            Some(User {
                email: "dev@acme.io".to_string(),
                name: "Dev".to_string(),
                picture: None,
            }),
        );

        // Assert
        assert!(auth.is_authenticated());
        assert_eq!(auth.access_token(), Some("token-1"));
        assert_eq!(
            auth.current_user().map(|user| user.email.as_str()),
            Some("dev@acme.io")
        );

        // Act
        auth.apply_logout();

        // Assert
        assert!(!auth.is_authenticated());
        assert!(auth.access_token().is_none());
    }

    #[test]
    fn test_session_without_user_still_authenticates() {
        // Arrange
        let auth = AuthManager::new(Some(StoredSession {
            access_token: "token-2".to_string(),
            user: None,
        }));

        // Assert
        assert!(auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }
}
