use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::Podcast;
use crate::error::ApiError;
use crate::extract::BearerToken;
use crate::state::AppState;
use crate::usecase::auth::AuthenticateUseCase;
use crate::usecase::podcast::{CreatePodcastInput, CreatePodcastUseCase, ListPodcastsUseCase};

#[derive(Serialize)]
pub struct PodcastResponse {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub url: String,
}

impl From<Podcast> for PodcastResponse {
    fn from(podcast: Podcast) -> Self {
        Self {
            id: podcast.id,
            titulo: podcast.titulo,
            descripcion: podcast.descripcion,
            url: podcast.url,
        }
    }
}

// ── GET /api/podcasts ────────────────────────────────────────────────────────

pub async fn list_podcasts(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<PodcastResponse>>, ApiError> {
    AuthenticateUseCase {
        verifier: state.verifier.clone(),
    }
    .execute(&token)
    .await?;

    let podcasts = ListPodcastsUseCase {
        podcasts: state.podcast_repo(),
    }
    .execute()
    .await?;
    Ok(Json(podcasts.into_iter().map(Into::into).collect()))
}

// ── POST /api/podcasts ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePodcastRequest {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub url: Option<String>,
}

pub async fn create_podcast(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<CreatePodcastRequest>,
) -> Result<(StatusCode, Json<PodcastResponse>), ApiError> {
    AuthenticateUseCase {
        verifier: state.verifier.clone(),
    }
    .execute(&token)
    .await?;

    let podcast = CreatePodcastUseCase {
        podcasts: state.podcast_repo(),
    }
    .execute(CreatePodcastInput {
        titulo: body.titulo,
        descripcion: body.descripcion,
        url: body.url,
    })
    .await?;
    Ok((StatusCode::CREATED, Json(podcast.into())))
}
