use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::storage::ProviderConfig;

/// Stored provider configuration. The id is the operator-chosen name and
/// the row is immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StorageConfigEntity {
    pub id: String,
    pub provider: sqlx::types::Json<ProviderConfig>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
