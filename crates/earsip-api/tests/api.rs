//! Integration tests for the REST client.
//!
//! These tests run the client against an in-process axum server that mimics
//! the E-ARSIP service, so no real deployment is needed.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use earsip_api::{ApiClient, Error, FormData, ListQuery, MailStatus, Role};

const SESSION_COOKIE: &str = "sid=abc123";

/// A file part as received by the mock server.
#[derive(Debug, Clone)]
struct Upload {
    field: String,
    file_name: Option<String>,
    size: usize,
}

#[derive(Default)]
struct MockState {
    inbox: Mutex<Vec<Value>>,
    texts: Mutex<HashMap<String, String>>,
    uploads: Mutex<Vec<Upload>>,
    dispositions: Mutex<Vec<(String, String)>>,
}

fn superadmin() -> Value {
    json!({
        "_id": "u1",
        "name": "Ahmad Dahlan",
        "username": "admin",
        "role": "superadmin",
        "status": "active"
    })
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(SESSION_COOKIE))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Sesi tidak valid"})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "rahasia" {
        (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({"message": "Login berhasil", "user": superadmin()})),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Username atau password salah"})),
        )
            .into_response()
    }
}

async fn current_user(headers: HeaderMap) -> Response {
    if has_session(&headers) {
        Json(json!({"user": superadmin()})).into_response()
    } else {
        unauthorized()
    }
}

async fn check(headers: HeaderMap) -> Response {
    if has_session(&headers) {
        Json(json!({"authenticated": true, "user": superadmin()})).into_response()
    } else {
        unauthorized()
    }
}

async fn logout() -> StatusCode {
    StatusCode::OK
}

async fn list_inbox(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: usize = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);
    let search = query.get("search");

    let docs = state.inbox.lock().unwrap();
    let matching: Vec<&Value> = docs
        .iter()
        .filter(|d| {
            search.is_none_or(|s| d["number"].as_str().unwrap_or_default().contains(s.as_str()))
        })
        .collect();
    let total = matching.len();
    let pages = total.div_ceil(limit).max(1);
    let items: Vec<Value> = matching
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    Json(json!({
        "documents": items,
        "pagination": {"page": page, "pages": pages, "total": total}
    }))
}

async fn delete_inbox(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    let mut docs = state.inbox.lock().unwrap();
    let before = docs.len();
    docs.retain(|d| d["_id"] != id.as_str());
    if docs.len() == before {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Surat tidak ditemukan"})),
        )
            .into_response()
    } else {
        Json(json!({"message": "Surat berhasil dihapus"})).into_response()
    }
}

async fn create_inbox(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> Response {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap();
        if file_name.is_some() {
            state.uploads.lock().unwrap().push(Upload {
                field: name,
                file_name,
                size: data.len(),
            });
        } else {
            let value = String::from_utf8_lossy(&data).into_owned();
            state.texts.lock().unwrap().insert(name, value);
        }
    }
    (
        StatusCode::CREATED,
        Json(json!({"message": "Surat masuk berhasil ditambahkan"})),
    )
        .into_response()
}

async fn dispose(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let action = body["action"].as_str().unwrap_or_default().to_string();
    state.dispositions.lock().unwrap().push((id, action));
    Json(json!({"message": "Disposisi berhasil"}))
}

async fn organization() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Organisasi belum dibuat"})),
    )
        .into_response()
}

async fn by_category() -> Json<Value> {
    Json(json!({"data": [
        {"category": "Undangan", "count": 5},
        {"category": "Pemberitahuan", "count": 2}
    ]}))
}

async fn verifications() -> Json<Value> {
    Json(json!({
        "data": [{"_id": "o1", "number": "001/KL/2025", "destination": "PWM", "status": "wait"}],
        "currentPage": 1,
        "totalPages": 3
    }))
}

fn seed(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            json!({
                "_id": format!("m{i}"),
                "number": format!("{i:03}/UND/IX/2025"),
                "category": "Undangan",
                "date": "2025-09-01T00:00:00.000Z",
                "recievedDate": "2025-09-02T00:00:00.000Z",
                "origin": "Dinas Pendidikan",
                "summary": "Undangan rapat",
                "status": "wait"
            })
        })
        .collect()
}

async fn spawn(state: Arc<MockState>) -> ApiClient {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/user", get(current_user))
        .route("/api/auth/logout", post(logout))
        .route("/api/check", get(check))
        .route("/api/inbox", get(list_inbox).post(create_inbox))
        .route("/api/inbox/:id", delete(delete_inbox))
        .route("/api/inbox/disposisi/:id", put(dispose))
        .route("/api/outbox/verifikasi", get(verifications))
        .route("/api/organization", get(organization))
        .route("/api/stats/kategori", get(by_category))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(&format!("http://{addr}/api")).unwrap()
}

#[tokio::test]
async fn test_login_establishes_cookie_session() {
    let client = spawn(Arc::new(MockState::default())).await;

    let err = client.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(client.check_session().await.is_err());

    let response = client.login("admin", "rahasia").await.unwrap();
    assert_eq!(response.user.unwrap().role, Role::Superadmin);

    // Clones share the cookie jar.
    let clone = client.clone();
    let user = clone.current_user().await.unwrap();
    assert_eq!(user.username, "admin");
    assert!(client.check_session().await.unwrap().is_valid());
}

#[tokio::test]
async fn test_login_rejected_carries_server_message() {
    let client = spawn(Arc::new(MockState::default())).await;

    let err = client.login("admin", "salah").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login gagal"), "Username atau password salah");
}

#[tokio::test]
async fn test_logout_with_empty_body() {
    let client = spawn(Arc::new(MockState::default())).await;
    let ack = client.logout().await.unwrap();
    assert_eq!(ack.message, None);
    assert_eq!(ack.message_or("Logout berhasil"), "Logout berhasil");
}

#[tokio::test]
async fn test_inbox_pages_follow_offset_and_limit() {
    let state = Arc::new(MockState::default());
    *state.inbox.lock().unwrap() = seed(12);
    let client = spawn(Arc::clone(&state)).await;

    let first = client.list_inbox(&ListQuery::new(1, 10)).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!((first.page, first.pages), (1, 2));
    assert_eq!(first.total, Some(12));
    assert_eq!(first.items[0].id, "m1");
    assert_eq!(first.items[0].received_date.as_deref(), Some("2025-09-02T00:00:00.000Z"));

    let second = client.list_inbox(&ListQuery::new(2, 10)).await.unwrap();
    let ids: Vec<&str> = second.items.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m11", "m12"]);
}

#[tokio::test]
async fn test_inbox_search_is_forwarded() {
    let state = Arc::new(MockState::default());
    *state.inbox.lock().unwrap() = seed(12);
    let client = spawn(state).await;

    let page = client
        .list_inbox(&ListQuery::new(1, 10).with_search("011"))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].number, "011/UND/IX/2025");
}

#[tokio::test]
async fn test_deleted_mail_disappears_from_next_page() {
    let state = Arc::new(MockState::default());
    *state.inbox.lock().unwrap() = seed(3);
    let client = spawn(state).await;

    let ack = client.delete_inbox("m2").await.unwrap();
    assert_eq!(ack.message_or(""), "Surat berhasil dihapus");

    let page = client.list_inbox(&ListQuery::new(1, 10)).await.unwrap();
    assert!(page.items.iter().all(|m| m.id != "m2"));
    assert_eq!(page.items.len(), 2);

    let err = client.delete_inbox("m2").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message("Gagal menghapus surat"), "Surat tidak ditemukan");
}

#[tokio::test]
async fn test_create_inbox_sends_multipart() {
    let state = Arc::new(MockState::default());
    let client = spawn(Arc::clone(&state)).await;

    let dir = std::env::temp_dir().join(format!("earsip-api-test-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let scan = dir.join("scan.pdf");
    let extra = dir.join("lampiran.png");
    tokio::fs::write(&scan, b"%PDF-1.4 test").await.unwrap();
    tokio::fs::write(&extra, [0u8; 32]).await.unwrap();

    let form = FormData::new()
        .text("number", "001/UND/IX/2025")
        .text("origin", "Kecamatan")
        .file("mailPic", &scan)
        .file("attachments", &extra);
    let ack = client.create_inbox(form).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Surat masuk berhasil ditambahkan"));

    let texts = state.texts.lock().unwrap().clone();
    assert_eq!(texts.get("number").map(String::as_str), Some("001/UND/IX/2025"));
    let uploads = state.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].field, "mailPic");
    assert_eq!(uploads[0].file_name.as_deref(), Some("scan.pdf"));
    assert_eq!(uploads[0].size, 13);
    assert_eq!(uploads[1].field, "attachments");

    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[tokio::test]
async fn test_missing_attachment_is_not_sent() {
    let state = Arc::new(MockState::default());
    let client = spawn(Arc::clone(&state)).await;

    let form = FormData::new()
        .text("number", "002/UND/IX/2025")
        .file("mailPic", "/nonexistent/earsip/scan.pdf");
    let err = client.create_inbox(form).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(state.texts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_disposition_action_body() {
    let state = Arc::new(MockState::default());
    let client = spawn(Arc::clone(&state)).await;

    client.apply_disposition("m7", "Setuju").await.unwrap();
    let recorded = state.dispositions.lock().unwrap().clone();
    assert_eq!(recorded, vec![("m7".to_string(), "Setuju".to_string())]);
}

#[tokio::test]
async fn test_verification_queue_uses_data_envelope() {
    let client = spawn(Arc::new(MockState::default())).await;
    let page = client
        .list_outbox_verifications(&ListQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.pages, 3);
    assert_eq!(page.items[0].status, MailStatus::Wait);
    assert_eq!(page.items[0].destination, "PWM");
}

#[tokio::test]
async fn test_missing_organization_is_none() {
    let client = spawn(Arc::new(MockState::default())).await;
    assert_eq!(client.get_organization().await.unwrap(), None);
}

#[tokio::test]
async fn test_category_counts() {
    let client = spawn(Arc::new(MockState::default())).await;
    let counts = client.by_category().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].category, "Undangan");
    assert_eq!(counts[0].count, 5);
}

#[test]
fn test_date_only_from_crate_root() {
    assert_eq!(earsip_api::date_only("2025-09-01T07:30:00.000Z"), "2025-09-01");
    assert_eq!(earsip_api::date_only("2025"), "2025");
}
