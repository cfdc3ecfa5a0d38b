use uuid::Uuid;

use crate::{
    api::error,
    modules::photo::{model::NewPhoto, repository::PhotoRepository, schema::PhotoEntity},
};

#[derive(Clone)]
pub struct PhotoPgRepository {
    pool: sqlx::PgPool,
}

impl PhotoPgRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PhotoRepository for PhotoPgRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    async fn create<'e, E>(&self, photo: &NewPhoto, tx: E) -> Result<PhotoEntity, error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let entity = sqlx::query_as::<_, PhotoEntity>(
            r#"
            INSERT INTO photos (
                id, link_id, filename, local_path, captured_at, ip_address,
                user_agent, screen_resolution, destination_url,
                storage_config_id, upload_outcome
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(photo.id)
        .bind(&photo.link_id)
        .bind(&photo.filename)
        .bind(&photo.local_path)
        .bind(photo.captured_at)
        .bind(&photo.ip_address)
        .bind(&photo.user_agent)
        .bind(&photo.screen_resolution)
        .bind(&photo.destination_url)
        .bind(&photo.storage_config_id)
        .bind(sqlx::types::Json(&photo.upload_outcome))
        .fetch_one(tx)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, photo_id: &Uuid) -> Result<Option<PhotoEntity>, error::SystemError> {
        let photo = sqlx::query_as::<_, PhotoEntity>(
            r#"
            SELECT * FROM photos WHERE id = $1
            "#,
        )
        .bind(photo_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn list_all(&self) -> Result<Vec<PhotoEntity>, error::SystemError> {
        let photos = sqlx::query_as::<_, PhotoEntity>(
            r#"
            SELECT * FROM photos ORDER BY captured_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn list_by_link(&self, link_id: &str) -> Result<Vec<PhotoEntity>, error::SystemError> {
        let photos = sqlx::query_as::<_, PhotoEntity>(
            r#"
            SELECT * FROM photos WHERE link_id = $1 ORDER BY captured_at DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn delete<'e, E>(&self, photo_id: &Uuid, tx: E) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        sqlx::query(
            r#"
            DELETE FROM photos WHERE id = $1
            "#,
        )
        .bind(photo_id)
        .execute(tx)
        .await?;

        Ok(())
    }
}
