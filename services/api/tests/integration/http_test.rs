//! Router-level tests: real extractor, real verifier client against a local
//! mock identity provider, sea-orm `MockDatabase` for canned query results.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{Value, json};

use soundcast_api::infra::identity::HttpTokenVerifier;
use soundcast_api::router::build_router;
use soundcast_api::state::AppState;
use soundcast_api_schema::{roles, usuarios};

const VALID_TOKEN: &str = "valid-token";

/// Mock identity provider: accepts any path (the client posts to
/// `/v1/accounts:lookup?key=...`), recognizes one token.
async fn lookup(Json(body): Json<Value>) -> axum::response::Response {
    let token = body.get("idToken").and_then(Value::as_str).unwrap_or_default();
    if token == VALID_TOKEN {
        Json(json!({ "users": [{ "localId": "u1", "email": "a@b.com" }] })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "INVALID_ID_TOKEN" } })),
        )
            .into_response()
    }
}

async fn spawn_mock_idp() -> String {
    let app = Router::new().fallback(lookup);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn test_server(db: DatabaseConnection) -> TestServer {
    let base_url = spawn_mock_idp().await;
    let verifier = HttpTokenVerifier::new(&base_url, "test-key");
    TestServer::new(build_router(AppState { db, verifier })).unwrap()
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

#[tokio::test]
async fn should_greet_on_root() {
    let server = test_server(empty_db()).await;
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "SoundCast API running");
}

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = test_server(empty_db()).await;
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_list_roles_without_credential() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            roles::Model {
                id_rol: 1,
                nombre_rol: "administrador".to_owned(),
            },
            roles::Model {
                id_rol: 3,
                nombre_rol: "estandar".to_owned(),
            },
        ]])
        .into_connection();
    let server = test_server(db).await;

    let response = server.get("/roles").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([
        { "id_rol": 1, "nombre_rol": "administrador" },
        { "id_rol": 3, "nombre_rol": "estandar" }
    ]));
}

#[tokio::test]
async fn should_gate_protected_routes_without_credential() {
    let server = test_server(empty_db()).await;

    let responses = vec![
        server.get("/roles/1").await,
        server.post("/roles").await,
        server.put("/roles/1").await,
        server.delete("/roles/1").await,
        server.post("/usuarios/login").await,
        server.put("/usuarios/me").await,
        server.get("/api/podcasts").await,
        server.post("/api/podcasts").await,
    ];

    for response in responses {
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"], "missing or invalid credential");
    }
}

#[tokio::test]
async fn should_reject_invalid_token() {
    let server = test_server(empty_db()).await;
    let (name, value) = bearer("garbage");

    let response = server.get("/api/podcasts").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "missing or invalid credential");
}

#[tokio::test]
async fn should_return_404_for_missing_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<roles::Model>::new()])
        .into_connection();
    let server = test_server(db).await;
    let (name, value) = bearer(VALID_TOKEN);

    let response = server.get("/roles/99").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "role not found");
}

#[tokio::test]
async fn should_login_and_return_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![usuarios::Model {
            uid: "u1".to_owned(),
            email: Some("a@b.com".to_owned()),
            nombre: Some("Ana".to_owned()),
            apellido: None,
            refresh_token: None,
            id_rol: Some(3),
        }]])
        .into_connection();
    let server = test_server(db).await;
    let (name, value) = bearer(VALID_TOKEN);

    let response = server.post("/usuarios/login").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["uid"], "u1");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["nombre"], "Ana");
    assert_eq!(body["apellido"], Value::Null);
    assert_eq!(body["id_rol"], 3);
}

#[tokio::test]
async fn should_reject_register_with_missing_fields() {
    let server = test_server(empty_db()).await;

    let response = server
        .post("/usuarios/register")
        .json(&json!({ "uid": "u1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "missing data");
}
