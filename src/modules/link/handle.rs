use actix_web::{post, web};

use crate::{
    api::{error, success},
    modules::{
        link::{
            model::{CreateLinkBody, CreatedLink},
            repository_pg::LinkPgRepository,
            service::LinkService,
        },
        photo::repository_pg::PhotoPgRepository,
        storage_config::repository_pg::StorageConfigPgRepository,
    },
    utils::ValidatedJson,
};

pub type LinkSvc = LinkService<LinkPgRepository, PhotoPgRepository, StorageConfigPgRepository>;

#[post("/create_photo_link")]
pub async fn create_photo_link(
    service: web::Data<LinkSvc>,
    body: ValidatedJson<CreateLinkBody>,
) -> Result<success::Success<CreatedLink>, error::Error> {
    let created = service.create_link(body.0).await?;
    Ok(success::Success::ok(Some(created)).message("Capture link created"))
}

#[post("/delete_link/{link_id}")]
pub async fn delete_link(
    service: web::Data<LinkSvc>,
    link_id: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    service.delete_link(&link_id).await?;
    Ok(success::Success::ok(None).message("Link and associated photos deleted"))
}
