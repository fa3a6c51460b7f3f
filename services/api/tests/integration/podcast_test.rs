use soundcast_api::error::ApiError;
use soundcast_api::usecase::podcast::{
    CreatePodcastInput, CreatePodcastUseCase, ListPodcastsUseCase,
};

use crate::helpers::MockPodcastRepo;

fn input(titulo: &str) -> CreatePodcastInput {
    CreatePodcastInput {
        titulo: Some(titulo.to_owned()),
        descripcion: Some("D".to_owned()),
        url: Some("https://example.com/feed".to_owned()),
    }
}

#[tokio::test]
async fn should_create_podcast_with_incrementing_id() {
    let repo = MockPodcastRepo::default();
    let usecase = CreatePodcastUseCase {
        podcasts: repo.clone(),
    };

    let first = usecase.execute(input("T")).await.unwrap();
    let second = usecase.execute(input("T2")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(first.titulo, "T");
    assert_eq!(first.descripcion, "D");
    assert_eq!(first.url, "https://example.com/feed");
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn should_list_created_podcasts() {
    let repo = MockPodcastRepo::default();
    CreatePodcastUseCase {
        podcasts: repo.clone(),
    }
    .execute(input("T"))
    .await
    .unwrap();

    let podcasts = ListPodcastsUseCase {
        podcasts: repo,
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(podcasts.len(), 1);
    assert_eq!(podcasts[0].titulo, "T");
}

#[tokio::test]
async fn should_reject_create_with_missing_field() {
    let usecase = CreatePodcastUseCase {
        podcasts: MockPodcastRepo::default(),
    };
    let result = usecase
        .execute(CreatePodcastInput {
            titulo: Some("T".to_owned()),
            descripcion: None,
            url: Some("U".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

#[tokio::test]
async fn should_reject_create_with_empty_title() {
    let usecase = CreatePodcastUseCase {
        podcasts: MockPodcastRepo::default(),
    };
    let result = usecase
        .execute(CreatePodcastInput {
            titulo: Some(String::new()),
            descripcion: Some("D".to_owned()),
            url: Some("U".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}
