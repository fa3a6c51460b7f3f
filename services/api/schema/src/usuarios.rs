use sea_orm::entity::prelude::*;

/// User row keyed by the identity provider's subject id.
///
/// `uid` is assigned by the external provider and immutable once stored.
/// Rows are created lazily on first verified login or by explicit
/// registration, and never deleted by this service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    pub email: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub refresh_token: Option<String>,
    pub id_rol: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::IdRol",
        to = "super::roles::Column::IdRol"
    )]
    Roles,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
