use actix_web::web;

use crate::handlers::photo_handler::{
    create_photo, delete_photo, get_photo, get_photos, get_photos_by_album, update_photo,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_photo)
        .service(get_photos)
        .service(get_photo)
        .service(update_photo)
        .service(delete_photo)
        .service(get_photos_by_album);
}
