//! Domain types. Pure data, no framework dependencies.

/// Identity attested by the external provider for one request.
///
/// Carries only what the provider vouches for: a stable subject id and,
/// when the provider knows it, an email address. Constructed exclusively
/// from a successful verification — handlers never build one from client
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub uid: String,
    pub email: Option<String>,
}

/// Local user record, one row per external subject id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub refresh_token: Option<String>,
    pub id_rol: Option<i32>,
}

/// Fields for inserting a user row. `apellido` and `refresh_token` start
/// unset in both provisioning paths.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uid: String,
    pub email: Option<String>,
    pub nombre: Option<String>,
    pub id_rol: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id_rol: i32,
    pub nombre_rol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Podcast {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct NewPodcast {
    pub titulo: String,
    pub descripcion: String,
    pub url: String,
}
