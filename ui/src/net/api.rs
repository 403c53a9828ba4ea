//! REST client for the external builder backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, one function per
//! [`Endpoint`]. Server-side (SSR): the same functions return an error since
//! the backend is only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages turn the error's display
//! text into a toast; nothing here retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{
    ApiError, AuthResponse, DataColumn, DataRelationship, DataTable, Endpoint, NewPage, NewTable, Page,
    SignInRequest, SignUpRequest, WidgetRecord,
};

const NO_BODY: Option<&()> = None;

/// Backend base URL, fixed at build time through `LCNC_BACKEND_URL`.
#[cfg(any(test, feature = "hydrate"))]
fn backend_base() -> &'static str {
    option_env!("LCNC_BACKEND_URL").unwrap_or(wire::DEFAULT_BACKEND_URL)
}

/// `Authorization` header value for `endpoint`, if it needs one.
#[cfg(any(test, feature = "hydrate"))]
fn authorization(endpoint: &Endpoint, token: Option<&str>) -> Result<Option<String>, ApiError> {
    if !endpoint.requires_auth() {
        return Ok(None);
    }
    token.map(|t| Some(wire::bearer(t))).ok_or(ApiError::MissingSession)
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize>(endpoint: &Endpoint, body: Option<&B>) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;
    use wire::Method;

    let url = endpoint.url(backend_base());
    let mut request = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(value) = authorization(endpoint, crate::util::session::load_token().as_deref())? {
        request = request.header("Authorization", &value);
    }
    let resp = match body {
        Some(body) => request.json(body).map_err(transport_error)?.send().await,
        None => request.send().await,
    }
    .map_err(transport_error)?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &text));
    }
    Ok(resp)
}

async fn fetch_json<B: Serialize, T: DeserializeOwned>(endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&endpoint, body).await?;
        resp.json::<T>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(server_unavailable())
    }
}

async fn fetch_text<B: Serialize>(endpoint: Endpoint, body: Option<&B>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&endpoint, body).await?;
        resp.text().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(server_unavailable())
    }
}

/// Like [`fetch_text`] for calls whose response body is not used.
async fn fetch_empty<B: Serialize>(endpoint: Endpoint, body: Option<&B>) -> Result<(), ApiError> {
    fetch_text(endpoint, body).await.map(|_| ())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/signin`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for rejected credentials.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = SignInRequest { email: email.to_owned(), password: password.to_owned() };
    fetch_json(Endpoint::SignIn, Some(&payload)).await
}

/// `POST /auth/signup`.
///
/// # Errors
///
/// Returns the backend's rejection.
pub async fn sign_up(request: &SignUpRequest) -> Result<(), ApiError> {
    fetch_empty(Endpoint::SignUp, Some(request)).await
}

// =============================================================================
// DATA MODEL
// =============================================================================

/// Fetch tables and relationships concurrently.
///
/// # Errors
///
/// Returns the first failure of either request.
pub async fn load_data_model() -> Result<(Vec<DataTable>, Vec<DataRelationship>), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        futures::try_join!(list_tables(), list_relationships())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn list_tables() -> Result<Vec<DataTable>, ApiError> {
    fetch_json(Endpoint::ListTables, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn create_table(table: &NewTable) -> Result<(), ApiError> {
    fetch_empty(Endpoint::CreateTable, Some(table)).await
}

/// Push table `table_id`'s definition to the physical database. Returns the
/// backend's status message.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn sync_table(table_id: i64) -> Result<String, ApiError> {
    fetch_text(Endpoint::SyncTable { table_id }, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn create_column(table_id: i64, column: &DataColumn) -> Result<(), ApiError> {
    fetch_empty(Endpoint::CreateColumn { table_id }, Some(column)).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn update_column(column_id: i64, column: &DataColumn) -> Result<(), ApiError> {
    fetch_empty(Endpoint::UpdateColumn { column_id }, Some(column)).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn delete_column(column_id: i64) -> Result<(), ApiError> {
    fetch_empty(Endpoint::DeleteColumn { column_id }, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn list_relationships() -> Result<Vec<DataRelationship>, ApiError> {
    fetch_json(Endpoint::ListRelationships, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn create_relationship(relationship: &DataRelationship) -> Result<(), ApiError> {
    fetch_empty(Endpoint::CreateRelationship, Some(relationship)).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn delete_relationship(relationship_id: i64) -> Result<(), ApiError> {
    fetch_empty(Endpoint::DeleteRelationship { relationship_id }, NO_BODY).await
}

// =============================================================================
// PAGES + WIDGETS
// =============================================================================

/// # Errors
///
/// Returns the transport or status failure.
pub async fn list_pages() -> Result<Vec<Page>, ApiError> {
    fetch_json(Endpoint::ListPages, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn create_page(page: &NewPage) -> Result<(), ApiError> {
    fetch_empty(Endpoint::CreatePage, Some(page)).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn get_page(page_id: i64) -> Result<Page, ApiError> {
    fetch_json(Endpoint::GetPage { page_id }, NO_BODY).await
}

/// Delete page `page_id` together with its widgets.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn delete_page(page_id: i64) -> Result<(), ApiError> {
    fetch_empty(Endpoint::DeletePage { page_id }, NO_BODY).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn list_widgets(page_id: i64) -> Result<Vec<WidgetRecord>, ApiError> {
    fetch_json(Endpoint::ListWidgets { page_id }, NO_BODY).await
}

/// Upsert a widget. The backend inserts when `id` is absent and returns the
/// stored record either way.
///
/// # Errors
///
/// Returns the transport, status or decode failure.
pub async fn sync_widget(record: &WidgetRecord) -> Result<WidgetRecord, ApiError> {
    fetch_json(Endpoint::SyncWidget, Some(record)).await
}

/// # Errors
///
/// Returns the transport or status failure.
pub async fn delete_widget(widget_id: i64) -> Result<(), ApiError> {
    fetch_empty(Endpoint::DeleteWidget { widget_id }, NO_BODY).await
}
