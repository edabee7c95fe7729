//! HTTP client for the grading backend API.

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::analysis::{AnalysisResult, User};

/// Backend base URL used when `GRADETTY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Google OAuth consent endpoint for the sign-in flow.
const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";

/// Error returned by grading backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success response carrying the backend's own error message.
    #[error("{detail}")]
    Backend { detail: String, status: u16 },
    /// Network or decoding failure below the HTTP layer.
    #[error("Failed to reach the grading service: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Response of a successful auth-code exchange.
///
/// The backend issues only the token; the user profile is optional and
/// absent in current backend versions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Donation link issued by the payment endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PaymentLink {
    pub payment_url: String,
    pub transaction_id: String,
}

/// Confirmation returned after an emailed report is dispatched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ReportReceipt {
    pub message: String,
}

/// Boxed async result used by [`GradeClient`] trait methods.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Async boundary to the grading backend used by app orchestration code.
///
/// Production uses [`RealGradeClient`], while tests can inject
/// `MockGradeClient` to exercise flows without a running backend.
#[cfg_attr(test, mockall::automock)]
pub trait GradeClient: Send + Sync {
    /// Submits a repository URL for analysis and returns the full result.
    ///
    /// The call stays pending for as long as the backend needs; there are no
    /// client-side retries or deadlines.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the URL or cannot complete
    /// the analysis.
    fn analyze(&self, github_url: String) -> ApiFuture<Result<AnalysisResult, ApiError>>;

    /// Exchanges a Google OAuth authorization code for an access token.
    ///
    /// # Errors
    /// Returns an error when the code is invalid or expired.
    fn exchange_auth_code(&self, code: String) -> ApiFuture<Result<LoginResponse, ApiError>>;

    /// Asks the backend to email a PDF report for `analysis` to the account
    /// behind `access_token`.
    ///
    /// # Errors
    /// Returns an error when the token is missing or expired, or report
    /// generation fails server-side.
    fn send_report(
        &self,
        access_token: String,
        analysis: AnalysisResult,
    ) -> ApiFuture<Result<ReportReceipt, ApiError>>;

    /// Requests a donation payment link for `amount` with a note.
    ///
    /// # Errors
    /// Returns an error when the backend cannot issue a link.
    fn generate_payment_link(
        &self,
        amount: u32,
        message: String,
    ) -> ApiFuture<Result<PaymentLink, ApiError>>;
}

/// [`GradeClient`] backed by a shared `reqwest` connection pool.
#[derive(Clone)]
pub struct RealGradeClient {
    base_url: String,
    http: reqwest::Client,
}

impl RealGradeClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// No request timeout is configured; analysis calls legitimately run for
    /// minutes and completion is reported through the event loop.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| format!("Failed to build HTTP client: {err}"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: Option<&str>,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.post(&url).json(&body);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(response.json().await?)
    }
}

impl GradeClient for RealGradeClient {
    fn analyze(&self, github_url: String) -> ApiFuture<Result<AnalysisResult, ApiError>> {
        let client = self.clone();

        Box::pin(async move {
            client
                .post_json(
                    "/api/analyze/",
                    None,
                    serde_json::json!({ "github_url": github_url }),
                )
                .await
        })
    }

    fn exchange_auth_code(&self, code: String) -> ApiFuture<Result<LoginResponse, ApiError>> {
        let client = self.clone();

        Box::pin(async move {
            client
                .post_json("/api/auth/google", None, serde_json::json!({ "code": code }))
                .await
        })
    }

    fn send_report(
        &self,
        access_token: String,
        analysis: AnalysisResult,
    ) -> ApiFuture<Result<ReportReceipt, ApiError>> {
        let client = self.clone();

        Box::pin(async move {
            client
                .post_json(
                    "/api/analyze/send-report",
                    Some(&access_token),
                    serde_json::json!({ "analysis_data": analysis }),
                )
                .await
        })
    }

    fn generate_payment_link(
        &self,
        amount: u32,
        message: String,
    ) -> ApiFuture<Result<PaymentLink, ApiError>> {
        let client = self.clone();

        Box::pin(async move {
            client
                .post_json(
                    "/api/payment/generate-link",
                    None,
                    serde_json::json!({ "amount": amount, "message": message }),
                )
                .await
        })
    }
}

/// Error payload shape used by the backend for all failure responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

async fn backend_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Request failed with status {status}"),
    };

    ApiError::Backend { detail, status }
}

/// Returns the backend base URL from `GRADETTY_API_URL`, falling back to
/// [`DEFAULT_API_URL`].
pub fn api_base_url() -> String {
    std::env::var("GRADETTY_API_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth client id from `GRADETTY_GOOGLE_CLIENT_ID`, when set.
pub fn google_client_id() -> Option<String> {
    std::env::var("GRADETTY_GOOGLE_CLIENT_ID")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Builds the Google consent URL whose backend callback displays the
/// one-time code accepted by [`GradeClient::exchange_auth_code`].
pub fn google_auth_url(client_id: &str, base_url: &str) -> String {
    let redirect_uri = format!("{}/api/auth/callback", base_url.trim_end_matches('/'));

    Url::parse_with_params(
        GOOGLE_AUTH_ENDPOINT,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "email profile"),
        ],
    )
    .map_or_else(|_| GOOGLE_AUTH_ENDPOINT.to_string(), |url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_auth_url_encodes_callback_and_scope() {
        // Arrange
        let client_id = "client-123.apps.googleusercontent.com";

        // Act
        let auth_url = google_auth_url(client_id, "http://localhost:8000/");

        // Assert
        assert!(auth_url.starts_with(GOOGLE_AUTH_ENDPOINT));
        assert!(auth_url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(auth_url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Fapi%2Fauth%2Fcallback"));
        assert!(auth_url.contains("response_type=code"));
        assert!(auth_url.contains("scope=email+profile"));
    }

    #[test]
    fn test_api_error_backend_displays_detail_only() {
        // Arrange
        let error = ApiError::Backend {
            detail: "Invalid GitHub URL".to_string(),
            status: 400,
        };

        // Act & Assert
        assert_eq!(error.to_string(), "Invalid GitHub URL");
    }

    #[test]
    fn test_login_response_deserializes_without_user_profile() {
        // Arrange
        let payload = r#"{"access_token": "jwt-token", "token_type": "bearer"}"#;

        // Act
        let response: LoginResponse =
            serde_json::from_str(payload).expect("payload should deserialize");

        // Assert
        assert_eq!(response.access_token, "jwt-token");
        assert_eq!(response.token_type, "bearer");
        assert!(response.user.is_none());
    }
}
