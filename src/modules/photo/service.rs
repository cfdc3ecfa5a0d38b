use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::link::repository::LinkRepository;
use crate::modules::photo::{
    model::{CaptureMeta, CaptureSaved, NewPhoto, StagingPolicy},
    repository::PhotoRepository,
    schema::PhotoEntity,
};
use crate::modules::storage_config::repository::StorageConfigRepository;
use crate::storage::UploadOutcome;
use crate::utils::sanitize_filename;

/// The upload dispatcher: stages the image, attempts the provider upload,
/// persists the photo record and bumps the link counters in one transaction.
#[derive(Clone)]
pub struct PhotoService<L, P, C>
where
    L: LinkRepository + Send + Sync,
    P: PhotoRepository + Send + Sync,
    C: StorageConfigRepository + Send + Sync,
{
    link_repo: Arc<L>,
    photo_repo: Arc<P>,
    config_repo: Arc<C>,
    upload_dir: String,
    staging: StagingPolicy,
}

/// Per-request-unique staged filename; concurrent captures never collide.
fn staged_filename(
    captured_at: chrono::DateTime<chrono::Utc>,
    link_id: &str,
    original: Option<&str>,
) -> String {
    let unique = Uuid::new_v4().simple().to_string();
    let base = original.filter(|n| !n.is_empty()).unwrap_or("photo.jpg");
    format!(
        "discrete_{}_{}_{}_{}",
        captured_at.format("%Y%m%d_%H%M%S"),
        &unique[..8],
        link_id,
        sanitize_filename(base)
    )
}

impl<L, P, C> PhotoService<L, P, C>
where
    L: LinkRepository + Send + Sync,
    P: PhotoRepository + Send + Sync,
    C: StorageConfigRepository + Send + Sync,
{
    pub fn new(
        link_repo: Arc<L>,
        photo_repo: Arc<P>,
        config_repo: Arc<C>,
        upload_dir: String,
        staging: StagingPolicy,
    ) -> Self {
        Self { link_repo, photo_repo, config_repo, upload_dir, staging }
    }

    /// Provider upload attempt. Every failure path degrades to a recorded
    /// outcome; nothing here can abort the capture request.
    async fn attempt_provider_upload(
        &self,
        config_id: Option<&str>,
        bytes: &[u8],
        filename: &str,
    ) -> Result<UploadOutcome, error::SystemError> {
        let Some(config_id) = config_id else {
            log::info!("No storage configuration selected; skipping upload of '{}'", filename);
            return Ok(UploadOutcome::skipped("no storage configuration selected"));
        };

        let Some(config) = self.config_repo.find_by_id(config_id).await? else {
            log::warn!(
                "Storage configuration '{}' not found; skipping upload of '{}'",
                config_id,
                filename
            );
            return Ok(UploadOutcome::skipped("storage configuration not found"));
        };

        match config.provider.upload(bytes, filename).await {
            Ok(remote) => Ok(UploadOutcome::uploaded(remote)),
            Err(e) => {
                log::error!("Error uploading '{}' via config '{}': {}", filename, config_id, e);
                Ok(UploadOutcome::failed(e))
            }
        }
    }

    /// Applies the staging policy to a staged file, returning the path to
    /// record when the file is kept.
    async fn settle_staged_file(&self, local_path: String) -> Option<String> {
        match self.staging {
            StagingPolicy::Retain => Some(local_path),
            StagingPolicy::Ephemeral => {
                if let Err(e) = tokio::fs::remove_file(&local_path).await {
                    log::warn!("Failed to remove staged file '{}': {}", local_path, e);
                } else {
                    log::info!("Staged file '{}' removed (ephemeral mode)", local_path);
                }
                None
            }
        }
    }

    pub async fn save_capture(
        &self,
        bytes: Vec<u8>,
        original_filename: Option<String>,
        link_id: &str,
        meta: CaptureMeta,
    ) -> Result<CaptureSaved, error::SystemError> {
        let link = self
            .link_repo
            .find_by_id(link_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Associated link not found"))?;

        // Server clock only. The form carries a client timestamp, but a
        // replayed or doctored request must not move last_clicked_at.
        let captured_at = chrono::Utc::now();
        let filename = staged_filename(captured_at, link_id, original_filename.as_deref());

        // Stage unconditionally; the provider adapters read from these bytes
        // and the retain policy serves the file later.
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let local_path = format!("{}/{}", self.upload_dir, filename);
        tokio::fs::write(&local_path, &bytes).await?;
        log::info!("Photo staged locally: {}", local_path);

        let outcome = match self
            .attempt_provider_upload(link.storage_config_id.as_deref(), &bytes, &filename)
            .await
        {
            Ok(outcome) => outcome,
            // The staged file must not leak when the config lookup itself
            // fails, so the staging policy applies on this exit too.
            Err(e) => {
                self.settle_staged_file(local_path).await;
                return Err(e);
            }
        };

        let retained_path = self.settle_staged_file(local_path).await;

        let new_photo = NewPhoto {
            id: Uuid::new_v4(),
            link_id: link.id.clone(),
            filename: filename.clone(),
            local_path: retained_path.clone(),
            captured_at,
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
            screen_resolution: meta.screen_resolution,
            destination_url: meta
                .destination_url
                .or_else(|| Some(link.destination_url.clone())),
            storage_config_id: link.storage_config_id.clone(),
            upload_outcome: outcome,
        };

        // Photo insert and counter bump commit or roll back together.
        let mut tx = self.photo_repo.get_pool().begin().await?;
        let entity = self.photo_repo.create(&new_photo, &mut *tx).await?;
        self.link_repo.record_capture(&link.id, captured_at, &mut *tx).await?;
        tx.commit().await?;

        log::info!(
            "Capture recorded for link '{}' (photo {}, outcome {:?})",
            link.id,
            entity.id,
            entity.upload_outcome.0
        );

        Ok(CaptureSaved {
            filename,
            local_path: retained_path,
            drive_info: entity.upload_outcome.0,
            photo_id: entity.id,
        })
    }

    pub async fn list_photos(&self) -> Result<Vec<PhotoEntity>, error::SystemError> {
        self.photo_repo.list_all().await
    }

    /// Operator-initiated delete: best-effort remote deletion first, then the
    /// retained local file, then the row.
    pub async fn delete_photo(&self, id: &Uuid) -> Result<(), error::SystemError> {
        let photo = self
            .photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Photo not found"))?;

        if let Some(remote_id) = photo.upload_outcome.remote_id() {
            match &photo.storage_config_id {
                Some(config_id) => match self.config_repo.find_by_id(config_id).await? {
                    Some(config) => {
                        if let Err(e) = config.provider.delete(remote_id).await {
                            log::error!(
                                "Error deleting remote file {} for photo {}: {}",
                                remote_id,
                                id,
                                e
                            );
                        }
                    }
                    None => log::warn!(
                        "Storage configuration '{}' no longer exists; skipping remote delete for photo {}",
                        config_id,
                        id
                    ),
                },
                None => log::warn!(
                    "Photo {} has remote id {} but no storage configuration reference",
                    id,
                    remote_id
                ),
            }
        }

        if let Some(local_path) = &photo.local_path {
            if Path::new(local_path).exists() {
                tokio::fs::remove_file(local_path).await.ok();
                log::info!("Local file '{}' removed", local_path);
            }
        }

        let mut tx = self.photo_repo.get_pool().begin().await?;
        self.photo_repo.delete(id, &mut *tx).await?;
        tx.commit().await?;
        log::info!("Photo metadata deleted for id {}", id);

        Ok(())
    }

    pub fn staging_policy(&self) -> StagingPolicy {
        self.staging
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_filenames_are_unique_and_traceable() {
        let at = chrono::DateTime::parse_from_rfc3339("2026-03-01T12:30:45Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let a = staged_filename(at, "ab12cd34", Some("discrete_1234.jpg"));
        let b = staged_filename(at, "ab12cd34", Some("discrete_1234.jpg"));

        assert!(a.starts_with("discrete_20260301_123045_"));
        assert!(a.contains("_ab12cd34_"));
        assert!(a.ends_with("discrete_1234.jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn missing_original_name_falls_back() {
        let at = chrono::Utc::now();
        let name = staged_filename(at, "ab12cd34", None);
        assert!(name.ends_with("photo.jpg"));
        let name = staged_filename(at, "ab12cd34", Some(""));
        assert!(name.ends_with("photo.jpg"));
    }

    #[test]
    fn hostile_original_names_are_sanitized() {
        let at = chrono::Utc::now();
        let name = staged_filename(at, "ab12cd34", Some("../../etc/passwd"));
        assert!(!name.contains('/'));
    }
}
