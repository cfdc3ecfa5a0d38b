use crate::{
    api::error,
    modules::link::{model::NewLink, schema::LinkEntity},
};

#[async_trait::async_trait]
pub trait LinkRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres>;

    async fn create(&self, link: &NewLink) -> Result<LinkEntity, error::SystemError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<LinkEntity>, error::SystemError>;

    async fn list_all(&self) -> Result<Vec<LinkEntity>, error::SystemError>;

    async fn delete<'e, E>(&self, id: &str, tx: E) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>;

    /// Bump clicks and photos_captured and stamp last_clicked_at, inside the
    /// caller's transaction so the counters stay in step with the photo row.
    async fn record_capture<'e, E>(
        &self,
        id: &str,
        at: chrono::DateTime<chrono::Utc>,
        tx: E,
    ) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>;
}
