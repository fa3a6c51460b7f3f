use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Role;
use crate::error::ApiError;
use crate::extract::BearerToken;
use crate::state::AppState;
use crate::usecase::auth::AuthenticateUseCase;
use crate::usecase::role::{
    CreateRoleUseCase, DeleteRoleUseCase, GetRoleUseCase, ListRolesUseCase, UpdateRoleUseCase,
};

#[derive(Serialize)]
pub struct RoleResponse {
    pub id_rol: i32,
    pub nombre_rol: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id_rol: role.id_rol,
            nombre_rol: role.nombre_rol,
        }
    }
}

#[derive(Deserialize)]
pub struct RoleRequest {
    pub nombre_rol: Option<String>,
}

async fn require_auth(state: &AppState, token: &str) -> Result<(), ApiError> {
    AuthenticateUseCase {
        verifier: state.verifier.clone(),
    }
    .execute(token)
    .await?;
    Ok(())
}

// ── GET /roles ───────────────────────────────────────────────────────────────

pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let roles = ListRolesUseCase {
        roles: state.role_repo(),
    }
    .execute()
    .await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

// ── GET /roles/{id} ──────────────────────────────────────────────────────────

pub async fn get_role(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RoleResponse>, ApiError> {
    require_auth(&state, &token).await?;
    let role = GetRoleUseCase {
        roles: state.role_repo(),
    }
    .execute(id)
    .await?;
    Ok(Json(role.into()))
}

// ── POST /roles ──────────────────────────────────────────────────────────────

pub async fn create_role(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<RoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    require_auth(&state, &token).await?;
    let role = CreateRoleUseCase {
        roles: state.role_repo(),
    }
    .execute(body.nombre_rol)
    .await?;
    Ok((StatusCode::CREATED, Json(role.into())))
}

// ── PUT /roles/{id} ──────────────────────────────────────────────────────────

pub async fn update_role(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<RoleRequest>,
) -> Result<Json<RoleResponse>, ApiError> {
    require_auth(&state, &token).await?;
    let role = UpdateRoleUseCase {
        roles: state.role_repo(),
    }
    .execute(id, body.nombre_rol)
    .await?;
    Ok(Json(role.into()))
}

// ── DELETE /roles/{id} ───────────────────────────────────────────────────────

pub async fn delete_role(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_auth(&state, &token).await?;
    DeleteRoleUseCase {
        roles: state.role_repo(),
    }
    .execute(id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
