use actix_web::web::ServiceConfig;

use crate::modules::link::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(create_photo_link).service(delete_link);
}
