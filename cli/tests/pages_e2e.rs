//! End-to-end page lifecycle against an in-process mock backend.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use cli::{BackendClient, CliError};
use wire::{AuthResponse, NewPage, Page, SignInRequest};

const TOKEN: &str = "test-jwt";

#[derive(Clone, Default)]
struct MockBackend {
    pages: Arc<Mutex<Vec<Page>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn sign_in(Json(req): Json<SignInRequest>) -> impl IntoResponse {
    if req.password == "secret" {
        Json(AuthResponse { jwt: TOKEN.to_owned() }).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Bad credentials").into_response()
    }
}

async fn list_pages(State(backend): State<MockBackend>, headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let pages = backend.pages.lock().expect("pages lock").clone();
    Json(pages).into_response()
}

async fn create_page(State(backend): State<MockBackend>, headers: HeaderMap, Json(new): Json<NewPage>) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut pages = backend.pages.lock().expect("pages lock");
    let id = pages.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let page = Page { id, name: new.name, background_color: new.background_color };
    pages.push(page.clone());
    Json(page).into_response()
}

async fn delete_page(State(backend): State<MockBackend>, headers: HeaderMap, Path(id): Path<i64>) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut pages = backend.pages.lock().expect("pages lock");
    let before = pages.len();
    pages.retain(|p| p.id != id);
    if pages.len() == before {
        (StatusCode::NOT_FOUND, "page not found").into_response()
    } else {
        (StatusCode::OK, "Page deleted").into_response()
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/signin", post(sign_in))
        .route("/api/pages/all", get(list_pages))
        .route("/api/pages/create", post(create_page))
        .route("/api/pages/delete/{id}", delete(delete_page))
        .with_state(MockBackend::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn page_lifecycle_create_list_delete() {
    let base = spawn_backend().await;

    let anonymous = BackendClient::new(base.clone(), None);
    let auth = anonymous.sign_in("dev@example.com", "secret").await.expect("sign in");
    let client = BackendClient::new(base, Some(auth.jwt));

    let page = NewPage { name: "Dashboard".to_owned(), background_color: Some("#0a0a0a".to_owned()) };
    client.create_page(&page).await.expect("create page");

    let pages = client.list_pages().await.expect("list pages");
    let created = pages.iter().find(|p| p.name == "Dashboard").expect("Dashboard listed");
    assert_eq!(created.background_color.as_deref(), Some("#0a0a0a"));

    client.delete_page(created.id).await.expect("delete page");
    let pages = client.list_pages().await.expect("list pages");
    assert!(pages.iter().all(|p| p.name != "Dashboard"));
}

#[tokio::test]
async fn backend_error_text_is_preserved() {
    let base = spawn_backend().await;
    let client = BackendClient::new(base, Some(TOKEN.to_owned()));
    match client.delete_page(404).await {
        Err(CliError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "page not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_password_is_a_401() {
    let base = spawn_backend().await;
    let client = BackendClient::new(base, None);
    let err = client.sign_in("dev@example.com", "nope").await.expect_err("rejected");
    assert!(matches!(err, CliError::Status { status: 401, .. }));
}

#[tokio::test]
async fn stale_token_is_rejected_by_backend() {
    let base = spawn_backend().await;
    let client = BackendClient::new(base, Some("expired".to_owned()));
    let err = client.list_pages().await.expect_err("unauthorized");
    assert!(matches!(err, CliError::Status { status: 401, .. }));
}
