use crate::domain::repository::RoleRepository;
use crate::domain::types::Role;
use crate::error::ApiError;

// ── ListRoles ────────────────────────────────────────────────────────────────

pub struct ListRolesUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Role>, ApiError> {
        self.roles.list().await
    }
}

// ── GetRole ──────────────────────────────────────────────────────────────────

pub struct GetRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> GetRoleUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Role, ApiError> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or(ApiError::RoleNotFound)
    }
}

// ── CreateRole ───────────────────────────────────────────────────────────────

pub struct CreateRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> CreateRoleUseCase<R> {
    pub async fn execute(&self, nombre_rol: Option<String>) -> Result<Role, ApiError> {
        let nombre_rol = nombre_rol.filter(|n| !n.is_empty()).ok_or(ApiError::MissingData)?;
        self.roles.create(&nombre_rol).await
    }
}

// ── UpdateRole ───────────────────────────────────────────────────────────────

pub struct UpdateRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> UpdateRoleUseCase<R> {
    pub async fn execute(&self, id: i32, nombre_rol: Option<String>) -> Result<Role, ApiError> {
        let nombre_rol = nombre_rol.filter(|n| !n.is_empty()).ok_or(ApiError::MissingData)?;
        self.roles
            .update(id, &nombre_rol)
            .await?
            .ok_or(ApiError::RoleNotFound)
    }
}

// ── DeleteRole ───────────────────────────────────────────────────────────────

pub struct DeleteRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> DeleteRoleUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if self.roles.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::RoleNotFound)
        }
    }
}
