pub mod podcast;
pub mod role;
pub mod user;

/// Handler for `GET /` — plain-text liveness greeting.
pub async fn index() -> &'static str {
    "SoundCast API running"
}
