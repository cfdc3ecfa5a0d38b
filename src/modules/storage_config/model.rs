use serde::Deserialize;
use validator::Validate;

use crate::storage::ProviderConfig;

#[derive(Debug, Deserialize, Validate)]
pub struct SaveConfigBody {
    #[validate(length(min = 1, max = 50, message = "Configuration name must be 1-50 characters"))]
    pub config_name: String,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct NewStorageConfig {
    pub id: String,
    pub provider: ProviderConfig,
}
