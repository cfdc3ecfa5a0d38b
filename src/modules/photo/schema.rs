use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::storage::UploadOutcome;

/// Captured photo row. Written once when an upload request is processed,
/// never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoEntity {
    pub id: Uuid,
    pub link_id: String,
    pub filename: String,
    /// Present only under the retaining staging policy.
    pub local_path: Option<String>,
    pub captured_at: chrono::DateTime<chrono::Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub screen_resolution: Option<String>,
    pub destination_url: Option<String>,
    pub storage_config_id: Option<String>,
    pub upload_outcome: sqlx::types::Json<UploadOutcome>,
}
