//! Background request helpers for the grading backend.
//!
//! Every spawned task runs one backend call to completion and emits exactly
//! one completion event. There are no retries, deadlines, or cancellation
//! paths; slow analyses simply keep their task alive until the backend
//! answers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppEvent;
use crate::domain::analysis::AnalysisResult;
use crate::infra::api::GradeClient;
use crate::infra::auth_store::{AuthStore, StoredSession};
use crate::infra::db::Database;

/// Stateless helpers that run backend calls off the UI loop.
pub(super) struct TaskService;

impl TaskService {
    /// Spawns a task that submits `repo_url` for analysis and persists the
    /// result on success.
    pub(super) fn spawn_analyze(
        client: Arc<dyn GradeClient>,
        db: Database,
        app_event_tx: mpsc::UnboundedSender<AppEvent>,
        repo_url: String,
    ) {
        tokio::spawn(async move {
            match client.analyze(repo_url.clone()).await {
                Ok(result) => {
                    let analysis_id = uuid::Uuid::new_v4().to_string();
                    match db.insert_analysis(&analysis_id, &repo_url, &result).await {
                        Ok(()) => {
                            tracing::info!(%analysis_id, repo_url, "analysis stored");
                            let _ = app_event_tx.send(AppEvent::AnalysisCompleted { analysis_id });
                        }
                        Err(err) => {
                            tracing::error!(repo_url, error = %err, "failed to store analysis");
                            let _ = app_event_tx.send(AppEvent::AnalysisFailed {
                                message: err,
                                repo_url,
                            });
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(repo_url, error = %err, "analysis request failed");
                    let _ = app_event_tx.send(AppEvent::AnalysisFailed {
                        message: err.to_string(),
                        repo_url,
                    });
                }
            }
        });
    }

    /// Spawns a task that exchanges a pasted authorization code for a token
    /// and persists the resulting session.
    pub(super) fn spawn_login(
        auth_store: AuthStore,
        client: Arc<dyn GradeClient>,
        app_event_tx: mpsc::UnboundedSender<AppEvent>,
        code: String,
    ) {
        tokio::spawn(async move {
            match client.exchange_auth_code(code).await {
                Ok(login) => {
                    let session = StoredSession {
                        access_token: login.access_token,
                        user: login.user,
                    };
                    if let Err(err) = auth_store.save(&session) {
                        // The in-memory session still works for this run; the
                        // user just has to sign in again next start.
                        tracing::warn!(error = %err, "failed to persist session");
                    }
                    let _ = app_event_tx.send(AppEvent::LoginCompleted {
                        access_token: session.access_token,
                        user: session.user,
                    });
                }
                Err(err) => {
                    tracing::error!(error = %err, "auth code exchange failed");
                    let _ = app_event_tx.send(AppEvent::LoginFailed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    /// Spawns a task that asks the backend to email a PDF report for
    /// `analysis`.
    pub(super) fn spawn_send_report(
        client: Arc<dyn GradeClient>,
        app_event_tx: mpsc::UnboundedSender<AppEvent>,
        access_token: String,
        analysis: AnalysisResult,
    ) {
        tokio::spawn(async move {
            match client.send_report(access_token, analysis).await {
                Ok(receipt) => {
                    let _ = app_event_tx.send(AppEvent::ReportSent {
                        message: receipt.message,
                    });
                }
                Err(err) => {
                    tracing::error!(error = %err, "report request failed");
                    let _ = app_event_tx.send(AppEvent::ReportFailed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    /// Spawns a task that requests a UPI donation link for `amount`.
    pub(super) fn spawn_payment_link(
        client: Arc<dyn GradeClient>,
        app_event_tx: mpsc::UnboundedSender<AppEvent>,
        amount: u32,
        message: String,
    ) {
        tokio::spawn(async move {
            match client.generate_payment_link(amount, message).await {
                Ok(link) => {
                    let _ = app_event_tx.send(AppEvent::PaymentLinkReady { link });
                }
                Err(err) => {
                    tracing::error!(error = %err, "payment link request failed");
                    let _ = app_event_tx.send(AppEvent::PaymentLinkFailed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::domain::analysis::RepoDetails;
    use crate::infra::api::{ApiError, LoginResponse, MockGradeClient, PaymentLink};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            details: RepoDetails {
                description: None,
                forks: 4,
                language: Some("Rust".to_string()),
                name: "demo".to_string(),
                open_issues: 1,
                owner: "acme".to_string(),
                stars: 12,
            },
            file_structure: None,
            roadmap: Vec::new(),
            score: 72.5,
            summary: "Decent project".to_string(),
            tech_stack: None,
        }
    }

    #[tokio::test]
    async fn test_spawn_analyze_persists_result_and_emits_completed() {
        // Arrange
        let database = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        let result = sample_result();
        let mut client = MockGradeClient::new();
        let analyze_result = result.clone();
        client
            .expect_analyze()
            .return_once(move |_| Box::pin(async move { Ok(analyze_result) }));
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_analyze(
            Arc::new(client),
            database.clone(),
            event_tx,
            "https://github.com/acme/demo".to_string(),
        );
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        let AppEvent::AnalysisCompleted { analysis_id } = event else {
            panic!("expected AnalysisCompleted, got {event:?}");
        };
        let row = database
            .get_analysis(&analysis_id)
            .await
            .expect("failed to load analysis")
            .expect("expected stored analysis");
        assert_eq!(row.repo_url, "https://github.com/acme/demo");
        assert_eq!(row.owner, "acme");
    }

    #[tokio::test]
    async fn test_spawn_analyze_emits_failed_on_backend_error() {
        // Arrange
        let database = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        let mut client = MockGradeClient::new();
        client.expect_analyze().return_once(|_| {
            Box::pin(async {
                Err(ApiError::Backend {
                    detail: "Repository not found".to_string(),
                    status: 404,
                })
            })
        });
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_analyze(
            Arc::new(client),
            database.clone(),
            event_tx,
            "https://github.com/acme/missing".to_string(),
        );
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        assert_eq!(
            event,
            AppEvent::AnalysisFailed {
                message: "Repository not found".to_string(),
                repo_url: "https://github.com/acme/missing".to_string(),
            }
        );
        let analyses = database
            .load_analyses()
            .await
            .expect("failed to load analyses");
        assert!(analyses.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_login_saves_session_and_emits_completed() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let auth_store = AuthStore::new(temp_dir.path().join("auth.json"));
        let mut client = MockGradeClient::new();
        client.expect_exchange_auth_code().return_once(|_| {
            Box::pin(async {
                Ok(LoginResponse {
                    access_token: "token-1".to_string(),
                    token_type: "bearer".to_string(),
                    user: None,
                })
            })
        });
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_login(
            auth_store.clone(),
            Arc::new(client),
            event_tx,
            "auth-code".to_string(),
        );
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        assert_eq!(
            event,
            AppEvent::LoginCompleted {
                access_token: "token-1".to_string(),
                user: None,
            }
        );
        let stored = auth_store.load().expect("expected persisted session");
        assert_eq!(stored.access_token, "token-1");
    }

    #[tokio::test]
    async fn test_spawn_login_emits_failed_on_rejected_code() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let auth_store = AuthStore::new(temp_dir.path().join("auth.json"));
        let mut client = MockGradeClient::new();
        client.expect_exchange_auth_code().return_once(|_| {
            Box::pin(async {
                Err(ApiError::Backend {
                    detail: "Invalid authorization code".to_string(),
                    status: 400,
                })
            })
        });
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_login(
            auth_store.clone(),
            Arc::new(client),
            event_tx,
            "bad-code".to_string(),
        );
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        assert_eq!(
            event,
            AppEvent::LoginFailed {
                message: "Invalid authorization code".to_string(),
            }
        );
        assert!(auth_store.load().is_none());
    }

    #[tokio::test]
    async fn test_spawn_payment_link_emits_ready() {
        // Arrange
        let mut client = MockGradeClient::new();
        client.expect_generate_payment_link().return_once(|_, _| {
            Box::pin(async {
                Ok(PaymentLink {
                    payment_url: "upi://pay?pa=reactor@upi&am=100".to_string(),
                    transaction_id: "txn-1".to_string(),
                })
            })
        });
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_payment_link(Arc::new(client), event_tx, 100, "Keep going".to_string());
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        let AppEvent::PaymentLinkReady { link } = event else {
            panic!("expected PaymentLinkReady, got {event:?}");
        };
        assert_eq!(link.transaction_id, "txn-1");
    }

    #[tokio::test]
    async fn test_spawn_send_report_emits_receipt_message() {
        // Arrange
        let mut client = MockGradeClient::new();
        client.expect_send_report().return_once(|_, _| {
            Box::pin(async {
                Ok(crate::infra::api::ReportReceipt {
                    message: "Report sent successfully to dev@acme.io".to_string(),
                })
            })
        });
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        // Act
        TaskService::spawn_send_report(
            Arc::new(client),
            event_tx,
            "token-1".to_string(),
            sample_result(),
        );
        let event = event_rx.recv().await.expect("expected completion event");

        // Assert
        assert_eq!(
            event,
            AppEvent::ReportSent {
                message: "Report sent successfully to dev@acme.io".to_string(),
            }
        );
    }
}
