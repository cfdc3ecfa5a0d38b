use std::sync::Arc;

use sqlx::PgPool;

use crate::api::error;
use crate::modules::link::model::NewLink;
use crate::modules::link::repository::LinkRepository;
use crate::modules::link::repository_pg::LinkPgRepository;
use crate::modules::photo::model::{CaptureMeta, StagingPolicy};
use crate::modules::photo::repository::PhotoRepository;
use crate::modules::photo::repository_pg::PhotoPgRepository;
use crate::modules::photo::service::PhotoService;
use crate::modules::storage_config::model::NewStorageConfig;
use crate::modules::storage_config::repository::StorageConfigRepository;
use crate::modules::storage_config::repository_pg::StorageConfigPgRepository;
use crate::modules::storage_config::schema::StorageConfigEntity;
use crate::storage::media_host::MediaHostProviderConfig;
use crate::storage::{ProviderConfig, UploadOutcome};

fn temp_upload_dir() -> String {
    std::env::temp_dir()
        .join(format!("captures_{}", uuid::Uuid::new_v4().simple()))
        .to_string_lossy()
        .into_owned()
}

fn photo_service(
    pool: &PgPool,
    upload_dir: String,
    staging: StagingPolicy,
) -> PhotoService<LinkPgRepository, PhotoPgRepository, StorageConfigPgRepository> {
    PhotoService::new(
        Arc::new(LinkPgRepository::new(pool.clone())),
        Arc::new(PhotoPgRepository::new(pool.clone())),
        Arc::new(StorageConfigPgRepository::new(pool.clone())),
        upload_dir,
        staging,
    )
}

async fn seed_link(pool: &PgPool, id: &str, config_id: Option<&str>) {
    LinkPgRepository::new(pool.clone())
        .create(&NewLink {
            id: id.to_string(),
            name: "Test link".to_string(),
            destination_url: "https://example.com".to_string(),
            storage_config_id: config_id.map(str::to_string),
        })
        .await
        .unwrap();
}

#[sqlx::test]
async fn capture_without_config_is_skipped_never_failed(pool: PgPool) {
    seed_link(&pool, "ab12cd34", None).await;
    let upload_dir = temp_upload_dir();
    let svc = photo_service(&pool, upload_dir.clone(), StagingPolicy::Ephemeral);

    let saved = svc
        .save_capture(vec![0u8; 4096], Some("photo.jpg".into()), "ab12cd34", CaptureMeta::default())
        .await
        .unwrap();

    assert!(matches!(saved.drive_info, UploadOutcome::Skipped { .. }));
    assert!(saved.local_path.is_none());

    // Ephemeral staging leaves nothing behind.
    let mut entries = tokio::fs::read_dir(&upload_dir).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}

#[sqlx::test]
async fn captures_bump_counters_and_stamp_server_time(pool: PgPool) {
    seed_link(&pool, "ab12cd34", None).await;
    let svc = photo_service(&pool, temp_upload_dir(), StagingPolicy::Ephemeral);

    let before = chrono::Utc::now();
    svc.save_capture(vec![0u8; 2048], None, "ab12cd34", CaptureMeta::default()).await.unwrap();
    svc.save_capture(vec![0u8; 2048], None, "ab12cd34", CaptureMeta::default()).await.unwrap();

    let link =
        LinkPgRepository::new(pool.clone()).find_by_id("ab12cd34").await.unwrap().unwrap();
    assert_eq!(link.clicks, 2);
    assert_eq!(link.photos_captured, 2);

    // last_clicked_at follows the server clock, not anything the visitor
    // put on the wire.
    let last = link.last_clicked_at.unwrap();
    assert!(last >= before);
    assert!(last <= chrono::Utc::now());

    let photos = PhotoPgRepository::new(pool.clone()).list_by_link("ab12cd34").await.unwrap();
    assert_eq!(photos.len(), 2);
    assert!(photos.iter().all(|p| p.captured_at >= before));
}

#[sqlx::test]
async fn unknown_link_is_rejected_without_writes(pool: PgPool) {
    let svc = photo_service(&pool, temp_upload_dir(), StagingPolicy::Retain);

    let err = svc
        .save_capture(vec![0u8; 2048], None, "nope0000", CaptureMeta::default())
        .await
        .unwrap_err();

    assert!(matches!(err, error::SystemError::NotFound(_)));
    let photos = PhotoPgRepository::new(pool.clone()).list_all().await.unwrap();
    assert!(photos.is_empty());
}

struct FailingConfigRepo {
    pool: PgPool,
}

#[async_trait::async_trait]
impl StorageConfigRepository for FailingConfigRepo {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    async fn create(
        &self,
        _config: &NewStorageConfig,
    ) -> Result<StorageConfigEntity, error::SystemError> {
        unreachable!()
    }

    async fn find_by_id(
        &self,
        _id: &str,
    ) -> Result<Option<StorageConfigEntity>, error::SystemError> {
        Err(error::SystemError::DatabaseError("connection reset".into()))
    }

    async fn list_all(&self) -> Result<Vec<StorageConfigEntity>, error::SystemError> {
        unreachable!()
    }

    async fn delete(&self, _id: &str) -> Result<(), error::SystemError> {
        unreachable!()
    }
}

#[sqlx::test]
async fn staged_file_is_cleaned_up_when_config_lookup_fails(pool: PgPool) {
    StorageConfigPgRepository::new(pool.clone())
        .create(&NewStorageConfig {
            id: "prod".to_string(),
            provider: ProviderConfig::MediaHost(MediaHostProviderConfig {
                cloud_name: "demo".into(),
                api_key: "k".into(),
                api_secret: "s".into(),
                folder: None,
            }),
        })
        .await
        .unwrap();
    seed_link(&pool, "ab12cd34", Some("prod")).await;

    let upload_dir = temp_upload_dir();
    let svc = PhotoService::new(
        Arc::new(LinkPgRepository::new(pool.clone())),
        Arc::new(PhotoPgRepository::new(pool.clone())),
        Arc::new(FailingConfigRepo { pool: pool.clone() }),
        upload_dir.clone(),
        StagingPolicy::Ephemeral,
    );

    let err = svc
        .save_capture(vec![0u8; 2048], None, "ab12cd34", CaptureMeta::default())
        .await
        .unwrap_err();
    assert!(matches!(err, error::SystemError::DatabaseError(_)));

    // The staged copy must not survive the failed request.
    let mut entries = tokio::fs::read_dir(&upload_dir).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());

    // And nothing was recorded against the link.
    let link =
        LinkPgRepository::new(pool.clone()).find_by_id("ab12cd34").await.unwrap().unwrap();
    assert_eq!(link.clicks, 0);
    assert_eq!(link.photos_captured, 0);
}
