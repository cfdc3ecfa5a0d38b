use std::sync::Arc;

use crate::api::error;
use crate::modules::link::{
    model::{CreateLinkBody, CreatedLink, NewLink, DEFAULT_LINK_NAME},
    repository::LinkRepository,
    schema::LinkEntity,
};
use crate::modules::photo::repository::PhotoRepository;
use crate::modules::storage_config::repository::StorageConfigRepository;
use crate::utils::generate_link_id;
use crate::ENV;

#[derive(Clone)]
pub struct LinkService<R, P, C>
where
    R: LinkRepository + Send + Sync,
    P: PhotoRepository + Send + Sync,
    C: StorageConfigRepository + Send + Sync,
{
    link_repo: Arc<R>,
    photo_repo: Arc<P>,
    config_repo: Arc<C>,
}

impl<R, P, C> LinkService<R, P, C>
where
    R: LinkRepository + Send + Sync,
    P: PhotoRepository + Send + Sync,
    C: StorageConfigRepository + Send + Sync,
{
    pub fn new(link_repo: Arc<R>, photo_repo: Arc<P>, config_repo: Arc<C>) -> Self {
        Self { link_repo, photo_repo, config_repo }
    }

    pub async fn create_link(&self, body: CreateLinkBody) -> Result<CreatedLink, error::SystemError> {
        if !(body.destination_url.starts_with("http://")
            || body.destination_url.starts_with("https://"))
        {
            return Err(error::SystemError::bad_request(
                "Invalid URL. It must start with http:// or https://",
            ));
        }

        let storage_config_id =
            body.drive_config_id.filter(|id| !id.trim().is_empty());
        if let Some(config_id) = &storage_config_id {
            if self.config_repo.find_by_id(config_id).await?.is_none() {
                return Err(error::SystemError::bad_request(format!(
                    "Storage configuration \"{config_id}\" does not exist"
                )));
            }
        }

        let name = body
            .link_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LINK_NAME.to_string());

        let new_link = NewLink {
            id: generate_link_id(),
            name,
            destination_url: body.destination_url,
            storage_config_id,
        };
        let entity = self.link_repo.create(&new_link).await?;

        log::info!(
            "Capture link created: id={}, destination={}, config={}",
            entity.id,
            entity.destination_url,
            entity.storage_config_id.as_deref().unwrap_or("none")
        );

        Ok(CreatedLink {
            photo_link: format!("{}/p/{}", ENV.base_url, entity.id),
            link_id: entity.id,
            destination_url: entity.destination_url,
            link_name: entity.name,
        })
    }

    pub async fn get_link(&self, id: &str) -> Result<Option<LinkEntity>, error::SystemError> {
        self.link_repo.find_by_id(id).await
    }

    pub async fn list_links(&self) -> Result<Vec<LinkEntity>, error::SystemError> {
        self.link_repo.list_all().await
    }

    /// Two-phase delete: best-effort remote deletion for every owned photo
    /// that was actually uploaded, then a transactional row delete. The FK
    /// cascade removes the photo rows. Remote failures are logged and never
    /// abort the link deletion.
    pub async fn delete_link(&self, id: &str) -> Result<(), error::SystemError> {
        self.link_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Link not found"))?;

        let photos = self.photo_repo.list_by_link(id).await?;
        for photo in &photos {
            let Some(remote_id) = photo.upload_outcome.remote_id() else {
                continue;
            };
            let Some(config_id) = &photo.storage_config_id else {
                log::warn!(
                    "Photo {} has remote id {} but its storage configuration is gone; skipping remote delete",
                    photo.id,
                    remote_id
                );
                continue;
            };
            match self.config_repo.find_by_id(config_id).await? {
                Some(config) => {
                    if let Err(e) = config.provider.delete(remote_id).await {
                        log::error!(
                            "Failed to delete remote file {} for photo {} during link deletion: {}",
                            remote_id,
                            photo.id,
                            e
                        );
                    }
                }
                None => log::warn!(
                    "Storage configuration '{}' no longer exists; skipping remote delete for photo {}",
                    config_id,
                    photo.id
                ),
            }
        }

        let mut tx = self.link_repo.get_pool().begin().await?;
        self.link_repo.delete(id, &mut *tx).await?;
        tx.commit().await?;

        log::info!("Link '{}' and its {} photo record(s) deleted", id, photos.len());
        Ok(())
    }
}
