use utoipa::OpenApi;

use super::{album_handler, folder_handler, photo_handler, photographer_handler};
use crate::message::{
    CreatedResponse, DeletedResponse, ErrorBody, LoginResponse, MessageBody, UpdatedResponse,
};
use crate::models::{
    Album, AlbumCreateRequest, AlbumSummary, AlbumUpdateRequest, Folder, FolderRequest,
    LoginRequest, Photo, PhotoRequest, Photographer, PhotographerRequest, PhotographerSummary,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snap Share API",
        version = "1.0.0",
        description = "API for managing photographers, folders, albums, and photos"
    ),
    servers((url = "http://localhost:3000", description = "Local server")),
    paths(
        photographer_handler::create_photographer,
        photographer_handler::login,
        photographer_handler::get_photographers,
        photographer_handler::get_photographer,
        photographer_handler::update_photographer,
        photographer_handler::delete_photographer,
        folder_handler::create_folder,
        folder_handler::get_folders,
        folder_handler::get_folder,
        folder_handler::update_folder,
        folder_handler::delete_folder,
        folder_handler::get_folders_by_photographer,
        folder_handler::get_albums_by_folder,
        album_handler::create_album,
        album_handler::get_albums,
        album_handler::get_album,
        album_handler::update_album,
        album_handler::delete_album,
        photo_handler::create_photo,
        photo_handler::get_photos,
        photo_handler::get_photo,
        photo_handler::update_photo,
        photo_handler::delete_photo,
        photo_handler::get_photos_by_album,
    ),
    components(schemas(
        Photographer,
        PhotographerRequest,
        PhotographerSummary,
        LoginRequest,
        LoginResponse,
        Folder,
        FolderRequest,
        Album,
        AlbumSummary,
        AlbumCreateRequest,
        AlbumUpdateRequest,
        Photo,
        PhotoRequest,
        CreatedResponse,
        UpdatedResponse,
        DeletedResponse,
        MessageBody,
        ErrorBody,
    )),
    tags(
        (name = "Photographers", description = "Photographer accounts and login"),
        (name = "Folders", description = "Folders owned by photographers"),
        (name = "Albums", description = "Albums inside folders"),
        (name = "Photos", description = "Photos inside albums")
    )
)]
pub struct ApiDoc;
