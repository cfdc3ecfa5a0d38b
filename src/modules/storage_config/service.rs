use std::sync::Arc;

use crate::api::error;
use crate::modules::storage_config::{
    model::{NewStorageConfig, SaveConfigBody},
    repository::StorageConfigRepository,
    schema::StorageConfigEntity,
};

#[derive(Clone)]
pub struct StorageConfigService<R>
where
    R: StorageConfigRepository + Send + Sync,
{
    config_repo: Arc<R>,
}

impl<R> StorageConfigService<R>
where
    R: StorageConfigRepository + Send + Sync,
{
    pub fn new(config_repo: Arc<R>) -> Self {
        Self { config_repo }
    }

    pub async fn save_config(
        &self,
        body: SaveConfigBody,
    ) -> Result<StorageConfigEntity, error::SystemError> {
        let new_config =
            NewStorageConfig { id: body.config_name.trim().to_string(), provider: body.provider };

        if new_config.id.is_empty() {
            return Err(error::SystemError::bad_request("Configuration name is required"));
        }

        // Duplicate names surface as a unique violation and map to Conflict.
        let entity = self.config_repo.create(&new_config).await?;
        log::info!("Storage configuration saved: {}", entity.id);
        Ok(entity)
    }

    pub async fn list_configs(&self) -> Result<Vec<StorageConfigEntity>, error::SystemError> {
        self.config_repo.list_all().await
    }

    pub async fn delete_config(&self, id: &str) -> Result<(), error::SystemError> {
        self.config_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Configuration not found"))?;

        self.config_repo.delete(id).await?;
        log::info!("Storage configuration deleted: {}", id);
        Ok(())
    }
}
