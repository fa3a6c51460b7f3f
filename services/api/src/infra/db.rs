use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    SqlErr,
};

use soundcast_api_schema::{podcasts, roles, usuarios};

use crate::domain::repository::{PodcastRepository, RoleRepository, UserRepository};
use crate::domain::types::{NewPodcast, NewUser, Podcast, Role, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, ApiError> {
        let model = usuarios::Entity::find_by_id(uid.to_owned())
            .one(&self.db)
            .await
            .context("find user by uid")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let result = usuarios::ActiveModel {
            uid: Set(user.uid.clone()),
            email: Set(user.email.clone()),
            nombre: Set(user.nombre.clone()),
            apellido: Set(None),
            refresh_token: Set(None),
            id_rol: Set(user.id_rol),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ApiError::UserAlreadyExists),
                _ => Err(ApiError::Internal(
                    anyhow::Error::new(e).context("create user"),
                )),
            },
        }
    }

    async fn replace_profile(
        &self,
        uid: &str,
        nombre: Option<&str>,
        apellido: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<Option<User>, ApiError> {
        // Replace semantics: all three columns are written, None → NULL.
        let am = usuarios::ActiveModel {
            uid: Set(uid.to_owned()),
            nombre: Set(nombre.map(str::to_owned)),
            apellido: Set(apellido.map(str::to_owned)),
            refresh_token: Set(refresh_token.map(str::to_owned)),
            ..Default::default()
        };
        match am.update(&self.db).await {
            Ok(model) => Ok(Some(user_from_model(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(ApiError::Internal(
                anyhow::Error::new(e).context("replace user profile"),
            )),
        }
    }
}

fn user_from_model(model: usuarios::Model) -> User {
    User {
        uid: model.uid,
        email: model.email,
        nombre: model.nombre,
        apellido: model.apellido,
        refresh_token: model.refresh_token,
        id_rol: model.id_rol,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn list(&self) -> Result<Vec<Role>, ApiError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::IdRol)
            .all(&self.db)
            .await
            .context("list roles")?;
        Ok(models.into_iter().map(role_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, ApiError> {
        let model = roles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find role by id")?;
        Ok(model.map(role_from_model))
    }

    async fn create(&self, nombre_rol: &str) -> Result<Role, ApiError> {
        let model = roles::ActiveModel {
            nombre_rol: Set(nombre_rol.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create role")?;
        Ok(role_from_model(model))
    }

    async fn update(&self, id: i32, nombre_rol: &str) -> Result<Option<Role>, ApiError> {
        let am = roles::ActiveModel {
            id_rol: Set(id),
            nombre_rol: Set(nombre_rol.to_owned()),
        };
        match am.update(&self.db).await {
            Ok(model) => Ok(Some(role_from_model(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(ApiError::Internal(
                anyhow::Error::new(e).context("update role"),
            )),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = roles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete role")?;
        Ok(result.rows_affected > 0)
    }
}

fn role_from_model(model: roles::Model) -> Role {
    Role {
        id_rol: model.id_rol,
        nombre_rol: model.nombre_rol,
    }
}

// ── Podcast repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPodcastRepository {
    pub db: DatabaseConnection,
}

impl PodcastRepository for DbPodcastRepository {
    async fn list(&self) -> Result<Vec<Podcast>, ApiError> {
        let models = podcasts::Entity::find()
            .order_by_asc(podcasts::Column::Id)
            .all(&self.db)
            .await
            .context("list podcasts")?;
        Ok(models.into_iter().map(podcast_from_model).collect())
    }

    async fn create(&self, podcast: &NewPodcast) -> Result<Podcast, ApiError> {
        let model = podcasts::ActiveModel {
            titulo: Set(podcast.titulo.clone()),
            descripcion: Set(podcast.descripcion.clone()),
            url: Set(podcast.url.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create podcast")?;
        Ok(podcast_from_model(model))
    }
}

fn podcast_from_model(model: podcasts::Model) -> Podcast {
    Podcast {
        id: model.id,
        titulo: model.titulo,
        descripcion: model.descripcion,
        url: model.url,
    }
}
