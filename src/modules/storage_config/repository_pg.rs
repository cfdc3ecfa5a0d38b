use crate::{
    api::error,
    modules::storage_config::{
        model::NewStorageConfig, repository::StorageConfigRepository, schema::StorageConfigEntity,
    },
};

#[derive(Clone)]
pub struct StorageConfigPgRepository {
    pool: sqlx::PgPool,
}

impl StorageConfigPgRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StorageConfigRepository for StorageConfigPgRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    async fn create(
        &self,
        config: &NewStorageConfig,
    ) -> Result<StorageConfigEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, StorageConfigEntity>(
            r#"
            INSERT INTO storage_configs (id, provider)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&config.id)
        .bind(sqlx::types::Json(&config.provider))
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<StorageConfigEntity>, error::SystemError> {
        let config = sqlx::query_as::<_, StorageConfigEntity>(
            r#"
            SELECT * FROM storage_configs WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn list_all(&self) -> Result<Vec<StorageConfigEntity>, error::SystemError> {
        let configs = sqlx::query_as::<_, StorageConfigEntity>(
            r#"
            SELECT * FROM storage_configs ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(configs)
    }

    async fn delete(&self, id: &str) -> Result<(), error::SystemError> {
        sqlx::query(
            r#"
            DELETE FROM storage_configs WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
