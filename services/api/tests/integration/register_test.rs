use soundcast_api::domain::types::VerifiedIdentity;
use soundcast_api::error::ApiError;
use soundcast_api::usecase::auth::ResolveUserUseCase;
use soundcast_api::usecase::user::{DEFAULT_ROLE_ID, RegisterUserInput, RegisterUserUseCase};

use crate::helpers::MockUserRepo;

fn input(uid: &str, email: &str, nombre: &str) -> RegisterUserInput {
    RegisterUserInput {
        uid: Some(uid.to_owned()),
        email: Some(email.to_owned()),
        nombre: Some(nombre.to_owned()),
    }
}

#[tokio::test]
async fn should_register_with_standard_role() {
    let repo = MockUserRepo::default();
    let usecase = RegisterUserUseCase {
        users: repo.clone(),
    };

    let user = usecase.execute(input("u1", "a@b.com", "Ana")).await.unwrap();

    assert_eq!(user.uid, "u1");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.nombre.as_deref(), Some("Ana"));
    assert_eq!(user.id_rol, Some(DEFAULT_ROLE_ID));
    assert_eq!(repo.insert_count(), 1);
}

#[tokio::test]
async fn should_reject_missing_uid() {
    let usecase = RegisterUserUseCase {
        users: MockUserRepo::default(),
    };
    let result = usecase
        .execute(RegisterUserInput {
            uid: None,
            email: Some("a@b.com".to_owned()),
            nombre: Some("Ana".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

#[tokio::test]
async fn should_reject_missing_email() {
    let usecase = RegisterUserUseCase {
        users: MockUserRepo::default(),
    };
    let result = usecase
        .execute(RegisterUserInput {
            uid: Some("u1".to_owned()),
            email: None,
            nombre: Some("Ana".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

#[tokio::test]
async fn should_reject_empty_nombre() {
    let usecase = RegisterUserUseCase {
        users: MockUserRepo::default(),
    };
    let result = usecase.execute(input("u1", "a@b.com", "")).await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

#[tokio::test]
async fn should_reject_duplicate_uid() {
    let repo = MockUserRepo::default();
    let usecase = RegisterUserUseCase {
        users: repo.clone(),
    };

    usecase.execute(input("u1", "a@b.com", "Ana")).await.unwrap();
    let result = usecase.execute(input("u1", "x@y.com", "Otra")).await;

    assert!(matches!(result, Err(ApiError::UserAlreadyExists)));
    assert_eq!(repo.row_count(), 1);
}

#[tokio::test]
async fn should_login_after_register_without_duplicating_row() {
    let repo = MockUserRepo::default();

    let registered = RegisterUserUseCase {
        users: repo.clone(),
    }
    .execute(input("u1", "a@b.com", "Ana"))
    .await
    .unwrap();

    let resolved = ResolveUserUseCase {
        users: repo.clone(),
    }
    .execute(&VerifiedIdentity {
        uid: "u1".to_owned(),
        email: Some("a@b.com".to_owned()),
    })
    .await
    .unwrap();

    assert_eq!(registered, resolved);
    assert_eq!(resolved.id_rol, Some(DEFAULT_ROLE_ID));
    assert_eq!(repo.insert_count(), 1);
    assert_eq!(repo.row_count(), 1);
}
