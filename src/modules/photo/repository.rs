use uuid::Uuid;

use crate::{
    api::error,
    modules::photo::{model::NewPhoto, schema::PhotoEntity},
};

#[async_trait::async_trait]
pub trait PhotoRepository {
    fn get_pool(&self) -> &sqlx::Pool<sqlx::Postgres>;

    async fn create<'e, E>(&self, photo: &NewPhoto, tx: E) -> Result<PhotoEntity, error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>;

    async fn find_by_id(&self, photo_id: &Uuid) -> Result<Option<PhotoEntity>, error::SystemError>;

    /// Newest first, for the gallery.
    async fn list_all(&self) -> Result<Vec<PhotoEntity>, error::SystemError>;

    async fn list_by_link(&self, link_id: &str) -> Result<Vec<PhotoEntity>, error::SystemError>;

    async fn delete<'e, E>(&self, photo_id: &Uuid, tx: E) -> Result<(), error::SystemError>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>;
}
