use actix_web::web::ServiceConfig;

use crate::modules::pages::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(home).service(admin).service(gallery).service(config_page);
}
