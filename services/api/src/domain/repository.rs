#![allow(async_fn_in_trait)]

use crate::domain::types::{NewPodcast, NewUser, Podcast, Role, User, VerifiedIdentity};
use crate::error::ApiError;

/// Port to the external identity provider.
///
/// Verification is fully delegated: the token is opaque here, and a
/// successful call is the only way a `VerifiedIdentity` comes into being.
pub trait TokenVerifierPort: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, ApiError>;
}

/// Repository for user rows keyed by subject id.
pub trait UserRepository: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new row. A subject-id collision surfaces as
    /// `ApiError::UserAlreadyExists` so callers can distinguish a race
    /// from a transport failure.
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;

    /// Replace-style profile update: all three fields are written as given,
    /// `None` becomes NULL. Returns `None` when no row matches `uid`.
    async fn replace_profile(
        &self,
        uid: &str,
        nombre: Option<&str>,
        apellido: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<Option<User>, ApiError>;
}

/// Repository for the role lookup table.
pub trait RoleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Role>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, ApiError>;
    async fn create(&self, nombre_rol: &str) -> Result<Role, ApiError>;
    /// Returns `None` when no row matches `id`.
    async fn update(&self, id: i32, nombre_rol: &str) -> Result<Option<Role>, ApiError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for podcast rows.
pub trait PodcastRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Podcast>, ApiError>;
    async fn create(&self, podcast: &NewPodcast) -> Result<Podcast, ApiError>;
}
