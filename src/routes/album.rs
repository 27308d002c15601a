use actix_web::web;

use crate::handlers::album_handler::{
    create_album, delete_album, get_album, get_albums, update_album,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_album)
        .service(get_albums)
        .service(get_album)
        .service(update_album)
        .service(delete_album);
}
