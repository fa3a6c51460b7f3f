use sea_orm::Database;
use tracing::info;

use soundcast_api::config::ApiConfig;
use soundcast_api::infra::identity::HttpTokenVerifier;
use soundcast_api::router::{build_router, cors_layer};
use soundcast_api::state::AppState;

#[tokio::main]
async fn main() {
    soundcast_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let verifier = HttpTokenVerifier::new(&config.identity_base_url, &config.identity_api_key);

    let state = AppState { db, verifier };

    let router = build_router(state).layer(cors_layer(&config.cors_origins));
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
