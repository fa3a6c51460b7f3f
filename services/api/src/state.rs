use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPodcastRepository, DbRoleRepository, DbUserRepository};
use crate::infra::identity::HttpTokenVerifier;

/// Shared application state passed to every handler via axum `State`.
///
/// Both resources are constructed once in `main` and injected; nothing in
/// the service reaches for a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub verifier: HttpTokenVerifier,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn podcast_repo(&self) -> DbPodcastRepository {
        DbPodcastRepository {
            db: self.db.clone(),
        }
    }
}
