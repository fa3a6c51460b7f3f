use crate::domain::repository::PodcastRepository;
use crate::domain::types::{NewPodcast, Podcast};
use crate::error::ApiError;

// ── ListPodcasts ─────────────────────────────────────────────────────────────

pub struct ListPodcastsUseCase<R: PodcastRepository> {
    pub podcasts: R,
}

impl<R: PodcastRepository> ListPodcastsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Podcast>, ApiError> {
        self.podcasts.list().await
    }
}

// ── CreatePodcast ────────────────────────────────────────────────────────────

pub struct CreatePodcastInput {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub url: Option<String>,
}

pub struct CreatePodcastUseCase<R: PodcastRepository> {
    pub podcasts: R,
}

impl<R: PodcastRepository> CreatePodcastUseCase<R> {
    pub async fn execute(&self, input: CreatePodcastInput) -> Result<Podcast, ApiError> {
        let (Some(titulo), Some(descripcion), Some(url)) =
            (input.titulo, input.descripcion, input.url)
        else {
            return Err(ApiError::MissingData);
        };
        if titulo.is_empty() || descripcion.is_empty() || url.is_empty() {
            return Err(ApiError::MissingData);
        }

        self.podcasts
            .create(&NewPodcast {
                titulo,
                descripcion,
                url,
            })
            .await
    }
}
