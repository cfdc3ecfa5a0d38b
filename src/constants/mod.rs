use crate::modules::photo::model::StagingPolicy;

pub struct Env {
    pub database_url: String,
    pub ip: String,
    pub port: u16,
    pub base_url: String,
    pub upload_dir: String,
    pub staging: StagingPolicy,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        // Public base for generated capture links; defaults to the bind address.
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", ip, port));
        let base_url = base_url.trim_end_matches('/').to_string();

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "captured_photos".to_string());

        let staging = std::env::var("STORAGE_MODE")
            .unwrap_or_else(|_| "ephemeral".to_string())
            .parse::<StagingPolicy>()
            .expect("STORAGE_MODE must be 'ephemeral' or 'retain'");

        Env { database_url, ip, port, base_url, upload_dir, staging }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
