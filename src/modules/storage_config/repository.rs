use crate::{
    api::error,
    modules::storage_config::{model::NewStorageConfig, schema::StorageConfigEntity},
};

#[async_trait::async_trait]
pub trait StorageConfigRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres>;

    async fn create(
        &self,
        config: &NewStorageConfig,
    ) -> Result<StorageConfigEntity, error::SystemError>;

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<StorageConfigEntity>, error::SystemError>;

    async fn list_all(&self) -> Result<Vec<StorageConfigEntity>, error::SystemError>;

    async fn delete(&self, id: &str) -> Result<(), error::SystemError>;
}
