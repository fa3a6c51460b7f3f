use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use soundcast_core::health::{healthz, readyz};
use soundcast_core::middleware::request_id_layer;

use crate::handlers::index;
use crate::handlers::podcast::{create_podcast, list_podcasts};
use crate::handlers::role::{create_role, delete_role, get_role, list_roles, update_role};
use crate::handlers::user::{login, register, update_me};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Roles
        .route("/roles", get(list_roles))
        .route("/roles", post(create_role))
        .route("/roles/{id}", get(get_role))
        .route("/roles/{id}", put(update_role))
        .route("/roles/{id}", delete(delete_role))
        // Users
        .route("/usuarios/login", post(login))
        .route("/usuarios/register", post(register))
        .route("/usuarios/me", put(update_me))
        // Podcasts
        .route("/api/podcasts", get(list_podcasts))
        .route("/api/podcasts", post(create_podcast))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

/// CORS layer for the configured origin allow-list. Applied in `main` so the
/// router itself stays test-friendly.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|o| o.parse().expect("invalid CORS origin"))
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
