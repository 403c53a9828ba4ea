//! Shared REST contract for the external builder backend.
//!
//! This crate owns the JSON representation used by both `ui` and `cli`:
//! data-model tables, columns and relationships, pages, widget records and
//! the auth exchange. It also owns the endpoint table so every caller builds
//! the same method + path for an operation.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as opaque text bodies. [`ApiError`] keeps that
//! text as-is so callers can surface it to the user without interpretation.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Error returned by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("server connection failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// An authenticated endpoint was called without a stored token.
    #[error("no session found, please log in again")]
    MissingSession,
}

impl ApiError {
    /// Build a status error from the raw response body.
    ///
    /// Empty bodies fall back to a generic message carrying the status code.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("request failed: {status}")
        } else {
            trimmed.to_owned()
        };
        Self::Status { status, message }
    }

    /// HTTP status code for [`ApiError::Status`], if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Every backend operation the builder consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    SignIn,
    SignUp,
    ListTables,
    CreateTable,
    SyncTable { table_id: i64 },
    CreateColumn { table_id: i64 },
    UpdateColumn { column_id: i64 },
    DeleteColumn { column_id: i64 },
    ListRelationships,
    CreateRelationship,
    DeleteRelationship { relationship_id: i64 },
    ListPages,
    CreatePage,
    GetPage { page_id: i64 },
    DeletePage { page_id: i64 },
    ListWidgets { page_id: i64 },
    SyncWidget,
    DeleteWidget { widget_id: i64 },
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::ListTables | Self::ListRelationships | Self::ListPages | Self::GetPage { .. } | Self::ListWidgets { .. } => {
                Method::Get
            }
            Self::UpdateColumn { .. } => Method::Put,
            Self::DeleteColumn { .. }
            | Self::DeleteRelationship { .. }
            | Self::DeletePage { .. }
            | Self::DeleteWidget { .. } => Method::Delete,
            Self::SignIn
            | Self::SignUp
            | Self::CreateTable
            | Self::SyncTable { .. }
            | Self::CreateColumn { .. }
            | Self::CreateRelationship
            | Self::CreatePage
            | Self::SyncWidget => Method::Post,
        }
    }

    /// Path (with query string, if any) relative to the backend base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::SignIn => "/auth/signin".to_owned(),
            Self::SignUp => "/auth/signup".to_owned(),
            Self::ListTables | Self::CreateTable => "/api/data/tables".to_owned(),
            Self::SyncTable { table_id } => format!("/api/data/sync/{table_id}"),
            Self::CreateColumn { table_id } => format!("/api/data/table/{table_id}/column/create"),
            Self::UpdateColumn { column_id } | Self::DeleteColumn { column_id } => {
                format!("/api/data/column/{column_id}")
            }
            Self::ListRelationships | Self::CreateRelationship => "/api/data/relationships".to_owned(),
            Self::DeleteRelationship { relationship_id } => format!("/api/data/relationships/{relationship_id}"),
            Self::ListPages => "/api/pages/all".to_owned(),
            Self::CreatePage => "/api/pages/create".to_owned(),
            Self::GetPage { page_id } => format!("/api/pages/get/{page_id}"),
            Self::DeletePage { page_id } => format!("/api/pages/delete/{page_id}"),
            Self::ListWidgets { page_id } => format!("/api/widgets?pageId={page_id}"),
            Self::SyncWidget => "/api/widgets/sync".to_owned(),
            Self::DeleteWidget { widget_id } => format!("/api/widgets/{widget_id}"),
        }
    }

    /// Absolute URL for this endpoint under `base`.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Sign-in and sign-up are the only calls made without a bearer token.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Successful sign-in response. The token is attached to later calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
}

// =============================================================================
// DATA MODEL
// =============================================================================

/// A data table with its columns, as returned by `GET /api/data/tables`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTable {
    pub id: i64,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<DataColumn>,
}

/// Payload for `POST /api/data/tables`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTable {
    pub table_name: String,
    pub description: String,
}

/// A single column definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct DataColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub column_name: String,
    pub data_type: String,
    pub length: i64,
    pub precision: i64,
    pub scale: i64,
    pub is_primary_key: bool,
    pub is_identity: bool,
    pub is_required: bool,
    pub is_unique: bool,
    pub column_order: i64,
}

impl Default for DataColumn {
    fn default() -> Self {
        Self {
            id: None,
            column_name: String::new(),
            data_type: "VARCHAR".to_owned(),
            length: 255,
            precision: 0,
            scale: 0,
            is_primary_key: false,
            is_identity: false,
            is_required: false,
            is_unique: false,
            column_order: 1,
        }
    }
}

/// Foreign-key mapping from a source column to a target column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRelationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fk_name: Option<String>,
    pub source_table_id: i64,
    pub source_column_id: i64,
    pub target_table_id: i64,
    pub target_column_id: i64,
}

// =============================================================================
// PAGES + WIDGETS
// =============================================================================

/// A designable page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Payload for `POST /api/pages/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// One stored `(name, value)` property of a widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub property_name: String,
    pub property_value: String,
}

/// A widget as exchanged with `/api/widgets`.
///
/// `POST /api/widgets/sync` inserts when `id` is absent and updates otherwise,
/// so `id` is omitted from the JSON rather than sent as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub page_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub widget_order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<PropertyRecord>,
}

/// Backend rows may carry explicit `null` for columns that were never set.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
