use crate::{
    api::error,
    modules::link::{model::NewLink, repository::LinkRepository, schema::LinkEntity},
};

#[derive(Clone)]
pub struct LinkPgRepository {
    pool: sqlx::PgPool,
}

impl LinkPgRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LinkRepository for LinkPgRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    async fn create(&self, link: &NewLink) -> Result<LinkEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, LinkEntity>(
            r#"
            INSERT INTO links (id, name, destination_url, storage_config_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&link.id)
        .bind(&link.name)
        .bind(&link.destination_url)
        .bind(&link.storage_config_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LinkEntity>, error::SystemError> {
        let link = sqlx::query_as::<_, LinkEntity>(
            r#"
            SELECT * FROM links WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn list_all(&self) -> Result<Vec<LinkEntity>, error::SystemError> {
        let links = sqlx::query_as::<_, LinkEntity>(
            r#"
            SELECT * FROM links ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn delete<'e, E>(&self, id: &str, tx: E) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        sqlx::query(
            r#"
            DELETE FROM links WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(tx)
        .await?;

        Ok(())
    }

    async fn record_capture<'e, E>(
        &self,
        id: &str,
        at: chrono::DateTime<chrono::Utc>,
        tx: E,
    ) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1,
                photos_captured = photos_captured + 1,
                last_clicked_at = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(at)
        .execute(tx)
        .await?;

        Ok(())
    }
}
