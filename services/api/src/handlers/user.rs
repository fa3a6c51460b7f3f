use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::ApiError;
use crate::extract::BearerToken;
use crate::state::AppState;
use crate::usecase::auth::{AuthenticateUseCase, ResolveUserUseCase};
use crate::usecase::user::{
    RegisterUserInput, RegisterUserUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

/// User row as served on the wire. Field names match the stored columns.
#[derive(Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub refresh_token: Option<String>,
    pub id_rol: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid,
            email: user.email,
            nombre: user.nombre,
            apellido: user.apellido,
            refresh_token: user.refresh_token,
            id_rol: user.id_rol,
        }
    }
}

// ── POST /usuarios/login ─────────────────────────────────────────────────────

/// Verify the bearer token, then resolve (and on first sight create) the
/// local user row for the verified identity.
pub async fn login(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let identity = AuthenticateUseCase {
        verifier: state.verifier.clone(),
    }
    .execute(&token)
    .await?;

    let user = ResolveUserUseCase {
        users: state.user_repo(),
    }
    .execute(&identity)
    .await?;

    Ok(Json(user.into()))
}

// ── POST /usuarios/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub nombre: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            uid: body.uid,
            email: body.email,
            nombre: body.nombre,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── PUT /usuarios/me ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub refresh_token: Option<String>,
}

/// Replace the profile fields of the authenticated user. The target row is
/// picked by the verified subject id, never by anything in the body.
pub async fn update_me(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let identity = AuthenticateUseCase {
        verifier: state.verifier.clone(),
    }
    .execute(&token)
    .await?;

    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(
            &identity.uid,
            UpdateProfileInput {
                nombre: body.nombre,
                apellido: body.apellidos,
                refresh_token: body.refresh_token,
            },
        )
        .await?;
    Ok(Json(user.into()))
}
