use serde::Serialize;
use uuid::Uuid;

use crate::storage::UploadOutcome;

/// What happens to the locally staged copy of an upload once the provider
/// attempt has finished. Injected into the dispatcher instead of checking a
/// deployment-mode global at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingPolicy {
    /// Delete the staged file after the provider attempt, success or not.
    Ephemeral,
    /// Keep the staged file and record its path as a fallback viewing route.
    Retain,
}

impl std::str::FromStr for StagingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ephemeral" => Ok(StagingPolicy::Ephemeral),
            "retain" => Ok(StagingPolicy::Retain),
            other => Err(format!("unknown storage mode '{other}'")),
        }
    }
}

/// Client-supplied and server-observed metadata accompanying a capture.
/// Capture times are stamped server-side; the client's clock is not part
/// of this.
#[derive(Debug, Default, Clone)]
pub struct CaptureMeta {
    pub user_agent: Option<String>,
    pub screen_resolution: Option<String>,
    pub ip_address: Option<String>,
    /// From the X-Destination audit header.
    pub destination_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub id: Uuid,
    pub link_id: String,
    pub filename: String,
    pub local_path: Option<String>,
    pub captured_at: chrono::DateTime<chrono::Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub screen_resolution: Option<String>,
    pub destination_url: Option<String>,
    pub storage_config_id: Option<String>,
    pub upload_outcome: UploadOutcome,
}

/// Body of the save_discrete_photo success response.
#[derive(Debug, Serialize)]
pub struct CaptureSaved {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    pub drive_info: UploadOutcome,
    pub photo_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_policy_parses_case_insensitively() {
        assert_eq!("ephemeral".parse::<StagingPolicy>().unwrap(), StagingPolicy::Ephemeral);
        assert_eq!("Retain".parse::<StagingPolicy>().unwrap(), StagingPolicy::Retain);
        assert!("local".parse::<StagingPolicy>().is_err());
    }

    #[test]
    fn capture_response_uses_drive_info_key() {
        let saved = CaptureSaved {
            filename: "discrete_1.jpg".into(),
            local_path: None,
            drive_info: UploadOutcome::skipped("no storage configuration selected"),
            photo_id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["drive_info"]["status"], "skipped");
        assert!(json.get("local_path").is_none());
    }
}
