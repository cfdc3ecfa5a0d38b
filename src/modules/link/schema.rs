use serde::Serialize;
use sqlx::prelude::FromRow;

/// Tracking link row. Counters and last_clicked_at move together on each
/// successful capture; everything else is fixed at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LinkEntity {
    pub id: String,
    pub name: String,
    pub destination_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub clicks: i64,
    pub photos_captured: i64,
    pub last_clicked_at: Option<chrono::DateTime<chrono::Utc>>,
    pub storage_config_id: Option<String>,
}
