//! App-layer composition root and shared state container.
//!
//! This module wires app submodules and exposes [`App`] used by runtime mode
//! handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use crate::domain::analysis::{AnalysisResult, AnalysisSummary, User};
use crate::domain::input::InputState;
use crate::infra::api::{GradeClient, PaymentLink};
use crate::infra::auth_store::AuthStore;
use crate::infra::db::Database;
use crate::ui::state::app_mode::AppMode;
use crate::ui::state::report::ReportState;

mod auth;
mod history;
mod service;
mod support;
mod task;

pub use auth::AuthManager;
pub use history::HistoryManager;
pub use service::AppServices;
pub use support::{
    DONATION_DEFAULT_AMOUNT, DONATION_MAX_AMOUNT, DONATION_MIN_AMOUNT, DONATION_STEP, SupportField,
    SupportManager,
};

/// How long a transient status-line notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Returns the gradetty home directory (`~/.gradetty`).
pub fn gradetty_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".gradetty");
    }

    PathBuf::from(".gradetty")
}

/// Top-level tabs of the main screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Analyses,
    Account,
    Support,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Analyses => "Analyses",
            Tab::Account => "Account",
            Tab::Support => "Support",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tab::Analyses => Tab::Account,
            Tab::Account => Tab::Support,
            Tab::Support => Tab::Analyses,
        }
    }
}

/// Internal app events emitted by background request tasks.
///
/// Producers should emit events only; state mutation is centralized in
/// [`App::apply_app_events`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AppEvent {
    /// Indicates an analysis finished and was persisted under `analysis_id`.
    AnalysisCompleted { analysis_id: String },
    /// Indicates an analysis request failed before anything was stored.
    AnalysisFailed { message: String, repo_url: String },
    /// Indicates the auth code exchange succeeded and the session was saved.
    LoginCompleted {
        access_token: String,
        user: Option<User>,
    },
    /// Indicates the auth code exchange was rejected.
    LoginFailed { message: String },
    /// Indicates a payment link request failed.
    PaymentLinkFailed { message: String },
    /// Indicates a fresh payment link is available.
    PaymentLinkReady { link: PaymentLink },
    /// Requests a full analysis list refresh.
    RefreshAnalyses,
    /// Indicates the emailed report request failed.
    ReportFailed { message: String },
    /// Indicates the backend accepted the emailed report request.
    ReportSent { message: String },
}

#[derive(Default)]
struct AppEventBatch {
    analysis_completion: Option<String>,
    analysis_failure: Option<(String, String)>,
    login_failure: Option<String>,
    login_success: Option<(String, Option<User>)>,
    payment_failure: bool,
    payment_link: Option<PaymentLink>,
    report_failure: Option<String>,
    report_success: Option<String>,
    should_force_reload: bool,
}

impl AppEventBatch {
    fn collect_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisCompleted { analysis_id } => {
                self.analysis_completion = Some(analysis_id);
            }
            AppEvent::AnalysisFailed { message, repo_url } => {
                self.analysis_failure = Some((message, repo_url));
            }
            AppEvent::LoginCompleted { access_token, user } => {
                self.login_success = Some((access_token, user));
            }
            AppEvent::LoginFailed { message } => {
                self.login_failure = Some(message);
            }
            AppEvent::PaymentLinkFailed { .. } => {
                self.payment_failure = true;
            }
            AppEvent::PaymentLinkReady { link } => {
                self.payment_link = Some(link);
            }
            AppEvent::RefreshAnalyses => {
                self.should_force_reload = true;
            }
            AppEvent::ReportFailed { message } => {
                self.report_failure = Some(message);
            }
            AppEvent::ReportSent { message } => {
                self.report_success = Some(message);
            }
        }
    }
}

/// Severity of a transient status-line notice.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Error,
    Info,
}

/// A short-lived message shown in the status bar until it expires.
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    shown_at: Instant,
}

/// Stores application state and coordinates analysis, auth, and donation
/// workflows.
pub struct App {
    pub current_tab: Tab,
    pub mode: AppMode,
    pub(crate) auth: AuthManager,
    pub(crate) history: HistoryManager,
    pub(crate) services: AppServices,
    pub(crate) support: SupportManager,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    notice: Option<Notice>,
}

impl App {
    /// Builds the app state from the persisted session and analysis history.
    pub async fn new(auth_store: AuthStore, client: Arc<dyn GradeClient>, db: Database) -> Self {
        let session = auth_store.load();

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let services = AppServices::new(auth_store, client, db, event_tx);

        let mut history = HistoryManager::new(Vec::new());
        if let Err(err) = history.reload(&services).await {
            tracing::warn!(error = %err, "failed to load analysis history");
        }

        Self {
            current_tab: Tab::Analyses,
            mode: AppMode::List,
            auth: AuthManager::new(session),
            history,
            services,
            support: SupportManager::new(),
            event_rx,
            notice: None,
        }
    }

    /// Selects the next top-level tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Moves selection to the next analysis in the list.
    pub fn next(&mut self) {
        self.history.next();
    }

    /// Moves selection to the previous analysis in the list.
    pub fn previous(&mut self) {
        self.history.previous();
    }

    /// Returns the analysis under the list cursor.
    pub fn selected_analysis(&self) -> Option<&AnalysisSummary> {
        self.history.selected_analysis()
    }

    /// Starts a background analysis of `repo_url`.
    pub fn submit_analysis(&self, repo_url: String) {
        task::TaskService::spawn_analyze(
            self.services.client(),
            self.services.db().clone(),
            self.services.event_sender(),
            repo_url,
        );
    }

    /// Starts the exchange of a pasted Google authorization code.
    pub fn submit_login_code(&self, code: String) {
        task::TaskService::spawn_login(
            self.services.auth_store().clone(),
            self.services.client(),
            self.services.event_sender(),
            code,
        );
    }

    /// Clears the persisted session and drops the in-memory one.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be removed.
    pub fn logout(&mut self) -> Result<(), String> {
        self.services.auth_store().clear()?;
        self.auth.apply_logout();

        Ok(())
    }

    /// Asks the backend to email a PDF report for `analysis`.
    ///
    /// # Errors
    /// Returns an error when no one is signed in.
    pub fn send_report(&self, analysis: AnalysisResult) -> Result<(), String> {
        let Some(access_token) = self.auth.access_token() else {
            return Err("Sign in on the Account tab to email reports".to_string());
        };
        task::TaskService::spawn_send_report(
            self.services.client(),
            self.services.event_sender(),
            access_token.to_string(),
            analysis,
        );

        Ok(())
    }

    /// Requests a payment link for the configured donation amount. Ignored
    /// while a previous request is still in flight.
    pub fn generate_payment_link(&mut self) {
        if self.support.pending {
            return;
        }
        self.support.begin_request();
        task::TaskService::spawn_payment_link(
            self.services.client(),
            self.services.event_sender(),
            self.support.amount,
            self.support.message.text().to_string(),
        );
    }

    /// Deletes a stored analysis and schedules a list refresh through events.
    ///
    /// # Errors
    /// Returns an error if the database delete fails.
    pub async fn delete_analysis(&mut self, analysis_id: &str) -> Result<(), String> {
        self.services.db().delete_analysis(analysis_id).await?;
        self.services.emit_app_event(AppEvent::RefreshAnalyses);
        self.process_pending_app_events().await;

        Ok(())
    }

    /// Loads a stored analysis and switches to the report screen.
    ///
    /// # Errors
    /// Returns an error if the analysis is missing or its stored payload does
    /// not parse.
    pub async fn open_report(&mut self, analysis_id: &str) -> Result<(), String> {
        let row = self
            .services
            .db()
            .get_analysis(analysis_id)
            .await?
            .ok_or_else(|| format!("Analysis {analysis_id} no longer exists"))?;
        let result: AnalysisResult = serde_json::from_str(&row.result_json)
            .map_err(|err| format!("Failed to decode stored analysis: {err}"))?;
        self.mode = AppMode::Report {
            report: ReportState::new(row.id, result),
        };

        Ok(())
    }

    /// Returns the active status-bar notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Hands the renderer split borrows: shared state plus the mutable table
    /// selection handle.
    pub(crate) fn render_parts(
        &mut self,
    ) -> (
        &[AnalysisSummary],
        Option<&User>,
        &AppMode,
        Option<&Notice>,
        &SupportManager,
        &mut TableState,
    ) {
        (
            &self.history.analyses,
            self.auth.current_user(),
            &self.mode,
            self.notice.as_ref(),
            &self.support,
            &mut self.history.table_state,
        )
    }

    pub(crate) fn show_info(&mut self, message: String) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            message,
            shown_at: Instant::now(),
        });
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drops the notice once it has been on screen long enough.
    pub(crate) fn clear_expired_notice(&mut self) {
        if let Some(notice) = &self.notice
            && notice.shown_at.elapsed() >= NOTICE_TTL
        {
            self.notice = None;
        }
    }

    /// Applies `first_event` plus any queued events as one reduced batch.
    pub(crate) async fn apply_app_events(&mut self, first_event: AppEvent) {
        let drained_events = self.drain_app_events(first_event);
        let event_batch = Self::reduce_app_events(drained_events);

        self.apply_app_event_batch(event_batch).await;
    }

    /// Processes currently queued app events without waiting.
    pub(crate) async fn process_pending_app_events(&mut self) {
        let Ok(first_event) = self.event_rx.try_recv() else {
            return;
        };

        self.apply_app_events(first_event).await;
    }

    fn drain_app_events(&mut self, first_event: AppEvent) -> Vec<AppEvent> {
        let mut events = vec![first_event];
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        events
    }

    fn reduce_app_events(events: Vec<AppEvent>) -> AppEventBatch {
        let mut event_batch = AppEventBatch::default();
        for event in events {
            event_batch.collect_event(event);
        }

        event_batch
    }

    async fn apply_app_event_batch(&mut self, event_batch: AppEventBatch) {
        if event_batch.should_force_reload || event_batch.analysis_completion.is_some() {
            if let Err(err) = self.history.reload(&self.services).await {
                self.show_error(err);
            }
        }

        if let Some((message, repo_url)) = event_batch.analysis_failure {
            if matches!(self.mode, AppMode::Analyzing { .. }) {
                self.mode = AppMode::UrlPrompt {
                    input: InputState::with_text(repo_url),
                };
            }
            self.show_error(message);
        }

        if let Some(analysis_id) = event_batch.analysis_completion
            && matches!(self.mode, AppMode::Analyzing { .. })
        {
            match self.open_report(&analysis_id).await {
                Ok(()) => self.show_info("Analysis complete".to_string()),
                Err(err) => {
                    self.mode = AppMode::List;
                    self.show_error(err);
                }
            }
        }

        if let Some((access_token, user)) = event_batch.login_success {
            self.auth.apply_login(access_token, user);
            if matches!(self.mode, AppMode::Login { .. }) {
                self.mode = AppMode::List;
                self.current_tab = Tab::Account;
            }
            self.show_info("Signed in".to_string());
        }

        if let Some(message) = event_batch.login_failure {
            if let AppMode::Login { login } = &mut self.mode {
                login.fail(message.clone());
            }
            self.show_error(message);
        }

        if let Some(link) = event_batch.payment_link {
            self.support.apply_payment_link(link);
            self.show_info("Payment link generated! Scan the QR code.".to_string());
        }

        if event_batch.payment_failure {
            self.support.apply_payment_failure();
            self.show_error("Failed to generate payment link".to_string());
        }

        if let Some(message) = event_batch.report_success {
            self.show_info(message);
        }

        if let Some(message) = event_batch.report_failure {
            self.show_error(message);
        }
    }
}
