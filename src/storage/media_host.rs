//! Media-hosting adapter: signed uploads into a named folder, Cloudinary
//! wire format (key/secret pair, SHA-256 request signature).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{RemoteFile, UploadError, HTTP};

const DEFAULT_FOLDER: &str = "discrete_captures";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaHostProviderConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    #[serde(default)]
    pub folder: Option<String>,
}

impl MediaHostProviderConfig {
    fn folder(&self) -> &str {
        self.folder.as_deref().filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FOLDER)
    }

    fn endpoint(&self, action: &str) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/image/{}", self.cloud_name, action)
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Request signature: parameters sorted by key, joined `k=v` with `&`, the
/// secret appended, hashed with SHA-256.
fn api_signature(params: &[(&str, String)], secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let joined =
        sorted.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

    let digest = Sha256::digest(format!("{joined}{secret}").as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn unix_timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

pub async fn upload(
    cfg: &MediaHostProviderConfig,
    bytes: &[u8],
    filename: &str,
) -> Result<RemoteFile, UploadError> {
    let public_id = filename.trim_end_matches(".jpg").trim_end_matches(".jpeg").to_string();
    let timestamp = unix_timestamp();
    let folder = cfg.folder().to_string();

    let signed = [
        ("folder", folder.clone()),
        ("public_id", public_id.clone()),
        ("timestamp", timestamp.clone()),
    ];
    let signature = api_signature(&signed, &cfg.api_secret);

    let part = reqwest::multipart::Part::bytes(bytes.to_vec())
        .file_name(filename.to_string())
        .mime_str("image/jpeg")?;
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("api_key", cfg.api_key.clone())
        .text("timestamp", timestamp)
        .text("folder", folder)
        .text("public_id", public_id)
        .text("signature", signature)
        .text("signature_algorithm", "sha256");

    let response = HTTP.post(cfg.endpoint("upload")).multipart(form).send().await?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Auth(format!("media host rejected credentials: {body}")));
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Transfer(format!("media host upload returned {status}: {body}")));
    }

    let uploaded: UploadResponse = response.json().await?;
    log::info!("Photo '{}' uploaded to media host as {}", filename, uploaded.public_id);

    Ok(RemoteFile {
        id: uploaded.public_id,
        name: filename.to_string(),
        view_link: uploaded.secure_url,
    })
}

pub async fn delete(cfg: &MediaHostProviderConfig, public_id: &str) -> Result<(), UploadError> {
    let timestamp = unix_timestamp();
    let signed = [("public_id", public_id.to_string()), ("timestamp", timestamp.clone())];
    let signature = api_signature(&signed, &cfg.api_secret);

    let response = HTTP
        .post(cfg.endpoint("destroy"))
        .form(&[
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
            ("api_key", cfg.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Transfer(format!("media host destroy returned {status}: {body}")));
    }

    let destroyed: DestroyResponse = response.json().await?;
    if destroyed.result != "ok" {
        return Err(UploadError::Transfer(format!("media host destroy result: {}", destroyed.result)));
    }
    log::info!("Deleted remote asset {} from media host", public_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_hex_sorted_and_secret_sensitive() {
        let params =
            [("timestamp", "1700000000".to_string()), ("public_id", "abc".to_string())];
        let sig = api_signature(&params, "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));

        // Parameter order must not matter.
        let reordered =
            [("public_id", "abc".to_string()), ("timestamp", "1700000000".to_string())];
        assert_eq!(sig, api_signature(&reordered, "secret"));

        assert_ne!(sig, api_signature(&params, "other-secret"));
    }

    #[test]
    fn folder_falls_back_to_default() {
        let mut cfg = MediaHostProviderConfig {
            cloud_name: "demo".into(),
            api_key: "k".into(),
            api_secret: "s".into(),
            folder: None,
        };
        assert_eq!(cfg.folder(), DEFAULT_FOLDER);
        cfg.folder = Some(String::new());
        assert_eq!(cfg.folder(), DEFAULT_FOLDER);
        cfg.folder = Some("campaign_a".into());
        assert_eq!(cfg.folder(), "campaign_a");
    }

    #[test]
    fn endpoint_embeds_cloud_name() {
        let cfg = MediaHostProviderConfig {
            cloud_name: "demo".into(),
            api_key: "k".into(),
            api_secret: "s".into(),
            folder: None,
        };
        assert_eq!(cfg.endpoint("upload"), "https://api.cloudinary.com/v1_1/demo/image/upload");
    }
}
