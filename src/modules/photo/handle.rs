use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use futures_util::TryStreamExt;
use uuid::Uuid;

use crate::api::{error, success};
use crate::modules::link::repository_pg::LinkPgRepository;
use crate::modules::photo::model::{CaptureMeta, CaptureSaved, StagingPolicy};
use crate::modules::photo::repository_pg::PhotoPgRepository;
use crate::modules::photo::service::PhotoService;
use crate::modules::storage_config::repository_pg::StorageConfigPgRepository;
use crate::utils::client_ip;

pub type PhotoSvc = PhotoService<LinkPgRepository, PhotoPgRepository, StorageConfigPgRepository>;

#[derive(Default)]
struct CaptureForm {
    photo: Option<Vec<u8>>,
    photo_filename: Option<String>,
    link_id: Option<String>,
    user_agent: Option<String>,
    screen_resolution: Option<String>,
}

async fn read_capture_form(mut payload: Multipart) -> Result<CaptureForm, error::Error> {
    let mut form = CaptureForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(|_| error::Error::InternalServer)? {
        let content_disposition = field
            .content_disposition()
            .ok_or_else(|| error::Error::bad_request("Missing content disposition"))?;
        let name = content_disposition.get_name().unwrap_or_default().to_string();
        let filename = content_disposition.get_filename().map(|f| f.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|_| error::Error::InternalServer)? {
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "photo" => {
                form.photo = Some(bytes);
                form.photo_filename = filename;
            }
            "link_id" => form.link_id = Some(String::from_utf8_lossy(&bytes).into_owned()),
            "user_agent" => form.user_agent = Some(String::from_utf8_lossy(&bytes).into_owned()),
            "screen_resolution" => {
                form.screen_resolution = Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            // Everything else, the client timestamp included, is drained
            // and ignored. Capture times come from the server clock.
            _ => {}
        }
    }

    Ok(form)
}

/// The upload dispatcher endpoint the capture page posts to.
#[post("/save_discrete_photo")]
pub async fn save_discrete_photo(
    payload: Multipart,
    req: HttpRequest,
    service: web::Data<PhotoSvc>,
) -> Result<success::Success<CaptureSaved>, error::Error> {
    let form = read_capture_form(payload).await?;

    let bytes = form.photo.ok_or_else(|| error::Error::bad_request("No photo file provided"))?;
    let link_id = form
        .link_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| error::Error::bad_request("No link ID provided"))?;

    let user_agent = form.user_agent.or_else(|| {
        req.headers().get("User-Agent").and_then(|h| h.to_str().ok()).map(str::to_string)
    });
    let destination_url = req
        .headers()
        .get("X-Destination")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    let meta = CaptureMeta {
        user_agent,
        screen_resolution: form.screen_resolution,
        ip_address: client_ip(&req),
        destination_url,
    };

    let saved = service.save_capture(bytes, form.photo_filename, &link_id, meta).await?;
    Ok(success::Success::ok(Some(saved)).message("Photo saved and processed successfully"))
}

/// Serves a staged photo. Only meaningful under the retaining staging
/// policy; ephemeral deployments refuse outright.
#[get("/view_photo/{filename}")]
pub async fn view_photo(
    filename: web::Path<String>,
    service: web::Data<PhotoSvc>,
) -> Result<HttpResponse, error::Error> {
    if service.staging_policy() != StagingPolicy::Retain {
        return Err(error::Error::forbidden("Local photo access is not available in this deployment"));
    }

    let filename = filename.into_inner();
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(error::Error::bad_request("Invalid filename"));
    }

    let path = format!("{}/{}", service.upload_dir(), filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&filename).first_or_octet_stream();
            Ok(HttpResponse::Ok().content_type(mime.as_ref()).body(bytes))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(error::Error::not_found("Photo not found locally"))
        }
        Err(e) => {
            log::error!("Error serving photo '{}': {}", filename, e);
            Err(error::Error::InternalServer)
        }
    }
}

#[post("/delete_photo/{photo_id}")]
pub async fn delete_photo(
    photo_id: web::Path<Uuid>,
    service: web::Data<PhotoSvc>,
) -> Result<success::Success<()>, error::Error> {
    service.delete_photo(&photo_id).await?;
    Ok(success::Success::ok(None).message("Photo deleted successfully"))
}
