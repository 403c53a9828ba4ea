//! Command-line client for the builder backend.
//!
//! [`BackendClient`] speaks the same REST contract as the browser UI, using
//! the endpoint table and DTOs from `wire`. It exists for scripting and
//! smoke-testing a backend without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns [`CliError`]. Non-success statuses keep the backend's
//! response text so the binary can print it verbatim.

#![allow(clippy::missing_errors_doc)]


use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{
    ApiError, AuthResponse, DataRelationship, DataTable, Endpoint, Method, NewPage, Page, SignInRequest, WidgetRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing session token; pass --token or set LCNC_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingSession => Self::MissingToken,
            ApiError::Status { status, message } => Self::Status { status, message },
            other => Self::Status { status: 0, message: other.to_string() },
        }
    }
}

const NO_BODY: Option<&()> = None;

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// HTTP client bound to one backend and, optionally, one session token.
///
/// Every method fails with [`CliError`]; authenticated endpoints fail with
/// [`CliError::MissingToken`] before any request is sent.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), token }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<B: Serialize>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<reqwest::Response, CliError> {
        let url = endpoint.url(&self.base_url);
        let mut request = self.http.request(http_method(endpoint.method()), &url);
        if endpoint.requires_auth() {
            let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &text).into());
        }
        Ok(response)
    }

    async fn json<B: Serialize, T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, CliError> {
        let text = self.text(endpoint, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn text<B: Serialize>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<String, CliError> {
        Ok(self.send(&endpoint, body).await?.text().await?)
    }

    // --- Auth ---

    /// Exchange credentials for a session token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, CliError> {
        let payload = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        self.json(Endpoint::SignIn, Some(&payload)).await
    }

    // --- Pages ---

    pub async fn list_pages(&self) -> Result<Vec<Page>, CliError> {
        self.json(Endpoint::ListPages, NO_BODY).await
    }

    /// Create a page; returns the backend's response text.
    pub async fn create_page(&self, page: &NewPage) -> Result<String, CliError> {
        self.text(Endpoint::CreatePage, Some(page)).await
    }

    pub async fn get_page(&self, page_id: i64) -> Result<Page, CliError> {
        self.json(Endpoint::GetPage { page_id }, NO_BODY).await
    }

    pub async fn delete_page(&self, page_id: i64) -> Result<String, CliError> {
        self.text(Endpoint::DeletePage { page_id }, NO_BODY).await
    }

    // --- Widgets ---

    pub async fn list_widgets(&self, page_id: i64) -> Result<Vec<WidgetRecord>, CliError> {
        self.json(Endpoint::ListWidgets { page_id }, NO_BODY).await
    }

    pub async fn delete_widget(&self, widget_id: i64) -> Result<String, CliError> {
        self.text(Endpoint::DeleteWidget { widget_id }, NO_BODY).await
    }

    // --- Data model ---

    pub async fn list_tables(&self) -> Result<Vec<DataTable>, CliError> {
        self.json(Endpoint::ListTables, NO_BODY).await
    }

    /// Apply a table's definition to the physical database.
    pub async fn sync_table(&self, table_id: i64) -> Result<String, CliError> {
        self.text(Endpoint::SyncTable { table_id }, NO_BODY).await
    }

    pub async fn list_relationships(&self) -> Result<Vec<DataRelationship>, CliError> {
        self.json(Endpoint::ListRelationships, NO_BODY).await
    }
}
