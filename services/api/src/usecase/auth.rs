use anyhow::anyhow;

use crate::domain::repository::{TokenVerifierPort, UserRepository};
use crate::domain::types::{NewUser, User, VerifiedIdentity};
use crate::error::ApiError;

// ── Authenticate ─────────────────────────────────────────────────────────────

/// Delegate the opaque bearer token to the identity provider.
pub struct AuthenticateUseCase<V: TokenVerifierPort> {
    pub verifier: V,
}

impl<V: TokenVerifierPort> AuthenticateUseCase<V> {
    pub async fn execute(&self, token: &str) -> Result<VerifiedIdentity, ApiError> {
        self.verifier.verify(token).await
    }
}

// ── ResolveUser (auto-provisioning) ──────────────────────────────────────────

/// Map a verified identity to exactly one local user row, creating it on
/// first sight.
///
/// Invariant: at most one row ever exists per subject id, and an invocation
/// performs zero or one insert. Existing rows are returned untouched — the
/// verified email never overwrites a stored one. The lazy path leaves
/// `id_rol` unset; only explicit registration assigns a role.
pub struct ResolveUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ResolveUserUseCase<R> {
    pub async fn execute(&self, identity: &VerifiedIdentity) -> Result<User, ApiError> {
        if let Some(user) = self.users.find_by_uid(&identity.uid).await? {
            return Ok(user);
        }

        let new = NewUser {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            nombre: None,
            id_rol: None,
        };
        match self.users.create(&new).await {
            Ok(user) => Ok(user),
            // Lost the insert race against a concurrent first-time request for
            // the same identity; the winner's row must be there now. One
            // re-lookup, no second insert attempt.
            Err(ApiError::UserAlreadyExists) => self
                .users
                .find_by_uid(&identity.uid)
                .await?
                .ok_or_else(|| {
                    ApiError::Internal(anyhow!("user row missing after unique violation"))
                }),
            Err(e) => Err(e),
        }
    }
}
