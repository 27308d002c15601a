use actix_web::web;

use crate::handlers::photographer_handler::{
    create_photographer, delete_photographer, get_photographer, get_photographers, login,
    update_photographer,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(create_photographer)
        .service(get_photographers)
        .service(get_photographer)
        .service(update_photographer)
        .service(delete_photographer);
}
