//! Shared app dependency container for managers and background workflows.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::infra::api::GradeClient;
use crate::infra::auth_store::AuthStore;
use crate::infra::db::Database;

/// Shared app dependencies used by managers and background workflows.
pub struct AppServices {
    auth_store: AuthStore,
    client: Arc<dyn GradeClient>,
    db: Database,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppServices {
    /// Creates a shared service container.
    pub(crate) fn new(
        auth_store: AuthStore,
        client: Arc<dyn GradeClient>,
        db: Database,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            auth_store,
            client,
            db,
            event_tx,
        }
    }

    /// Returns the on-disk session store.
    pub(crate) fn auth_store(&self) -> &AuthStore {
        &self.auth_store
    }

    /// Returns the shared grading backend client.
    pub(crate) fn client(&self) -> Arc<dyn GradeClient> {
        Arc::clone(&self.client)
    }

    /// Returns the application database handle.
    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    /// Enqueues an app event onto the internal event bus.
    pub(crate) fn emit_app_event(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Returns a clone of the app event sender.
    pub(crate) fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }
}
