use actix_web::web::ServiceConfig;

use crate::modules::photo::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(save_discrete_photo).service(view_photo).service(delete_photo);
}
