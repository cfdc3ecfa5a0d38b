use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_LINK_NAME: &str = "Unnamed link";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkBody {
    #[validate(url(message = "Destination must be a valid URL"))]
    pub destination_url: String,
    #[validate(length(max = 255, message = "Link name must be at most 255 characters"))]
    pub link_name: Option<String>,
    /// Empty string from the form select means "no provider".
    pub drive_config_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub name: String,
    pub destination_url: String,
    pub storage_config_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedLink {
    pub link_id: String,
    pub photo_link: String,
    pub destination_url: String,
    pub link_name: String,
}
