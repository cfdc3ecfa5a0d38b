use actix_web::web::ServiceConfig;

use crate::modules::storage_config::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(save_config).service(delete_config);
}
