use actix_web::{post, web};

use crate::{
    api::{error, success},
    modules::storage_config::{
        model::SaveConfigBody, repository_pg::StorageConfigPgRepository,
        service::StorageConfigService,
    },
    utils::ValidatedJson,
};

pub type ConfigSvc = StorageConfigService<StorageConfigPgRepository>;

#[post("/save_drive_config")]
pub async fn save_config(
    service: web::Data<ConfigSvc>,
    body: ValidatedJson<SaveConfigBody>,
) -> Result<success::Success<()>, error::Error> {
    service.save_config(body.0).await?;
    Ok(success::Success::ok(None).message("Storage configuration saved"))
}

#[post("/delete_drive_config/{name}")]
pub async fn delete_config(
    service: web::Data<ConfigSvc>,
    name: web::Path<String>,
) -> Result<success::Success<()>, error::Error> {
    service.delete_config(&name).await?;
    Ok(success::Success::ok(None).message("Storage configuration deleted"))
}
