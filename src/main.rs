use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::configs::connect_database;
use crate::modules::{
    link::{repository_pg::LinkPgRepository, service::LinkService},
    photo::{repository_pg::PhotoPgRepository, service::PhotoService},
    storage_config::{repository_pg::StorageConfigPgRepository, service::StorageConfigService},
};

mod api;
mod configs;
mod constants;
mod modules;
mod storage;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/health")]
async fn health_check() -> &'static str {
    "OK"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .map_err(|e| std::io::Error::other(format!("Migration error: {e}")))?;

    let link_repo = Arc::new(LinkPgRepository::new(db_pool.clone()));
    let photo_repo = Arc::new(PhotoPgRepository::new(db_pool.clone()));
    let config_repo = Arc::new(StorageConfigPgRepository::new(db_pool.clone()));

    let link_service =
        LinkService::new(link_repo.clone(), photo_repo.clone(), config_repo.clone());
    let photo_service = PhotoService::new(
        link_repo.clone(),
        photo_repo.clone(),
        config_repo.clone(),
        ENV.upload_dir.clone(),
        ENV.staging,
    );
    let config_service = StorageConfigService::new(config_repo.clone());

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(photo_service.clone()))
            .app_data(web::Data::new(config_service.clone()))
            .service(health_check)
            .configure(modules::capture::route::configure)
            .configure(modules::link::route::configure)
            .configure(modules::photo::route::configure)
            .configure(modules::storage_config::route::configure)
            .configure(modules::pages::route::configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
