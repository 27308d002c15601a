use actix_web::web;

use crate::handlers::folder_handler::{
    create_folder, delete_folder, get_albums_by_folder, get_folder, get_folders,
    get_folders_by_photographer, update_folder,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_folder)
        .service(get_folders)
        .service(get_folder)
        .service(update_folder)
        .service(delete_folder)
        .service(get_folders_by_photographer)
        .service(get_albums_by_folder);
}
