use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ApiError;

/// Role assigned on self-registration. The lazy provisioning path in
/// `ResolveUserUseCase` deliberately assigns none.
pub const DEFAULT_ROLE_ID: i32 = 3;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub nombre: Option<String>,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ApiError> {
        let (Some(uid), Some(email), Some(nombre)) = (input.uid, input.email, input.nombre)
        else {
            return Err(ApiError::MissingData);
        };
        if uid.is_empty() || email.is_empty() || nombre.is_empty() {
            return Err(ApiError::MissingData);
        }

        self.users
            .create(&NewUser {
                uid,
                email: Some(email),
                nombre: Some(nombre),
                id_rol: Some(DEFAULT_ROLE_ID),
            })
            .await
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub refresh_token: Option<String>,
}

/// Replace-style update of the authenticated user's profile fields.
///
/// Omitted fields are written as NULL, not preserved. A missing row is a
/// hard inconsistency (provisioning ran first) and surfaces as not-found,
/// never as a silent insert.
pub struct UpdateProfileUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(&self, uid: &str, input: UpdateProfileInput) -> Result<User, ApiError> {
        self.users
            .replace_profile(
                uid,
                input.nombre.as_deref(),
                input.apellido.as_deref(),
                input.refresh_token.as_deref(),
            )
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}
