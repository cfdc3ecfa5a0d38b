use actix_web::web::ServiceConfig;

use crate::modules::capture::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(capture_page);
}
