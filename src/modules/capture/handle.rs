use actix_web::{get, web, HttpResponse};

use crate::api::error;
use crate::modules::capture::template::render_capture_page;
use crate::modules::link::handle::LinkSvc;

/// Serves the discrete capture page, or a plain 404 when the link is gone.
/// No database writes happen here; counters move only when a capture lands.
#[get("/p/{link_id}")]
pub async fn capture_page(
    link_id: web::Path<String>,
    service: web::Data<LinkSvc>,
) -> Result<HttpResponse, error::Error> {
    let link_id = link_id.into_inner();

    let link = match service.get_link(&link_id).await? {
        Some(link) => link,
        None => {
            log::warn!("Capture page requested for unknown link: {}", link_id);
            return Ok(HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Link not found. It may have been deleted or is invalid."));
        }
    };

    log::info!("Starting discrete capture for link '{}' -> {}", link.id, link.destination_url);

    let page = render_capture_page(&link.destination_url, &link.id);
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
}
