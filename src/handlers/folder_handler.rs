use actix_web::{delete, get, post, put, web, HttpResponse};

use super::Payload;
use crate::db::Database;
use crate::message::{
    AppError, AppSuccess, CreatedResponse, DeletedResponse, ErrorBody, Listing, MessageBody,
    Resource, UpdatedResponse,
};
use crate::models::{AlbumSummary, Folder, FolderRequest};

/// The photographer id is stored as given; it is not checked against `photographers`.
#[utoipa::path(
    post,
    path = "/folders",
    tag = "Folders",
    request_body = FolderRequest,
    responses(
        (status = 201, description = "Folder created", body = CreatedResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[post("/folders")]
pub async fn create_folder(
    db: web::Data<Database>,
    payload: Payload<FolderRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();

    let result = sqlx::query(
        "
        INSERT INTO folders (name, photographer_id)
        VALUES (?, ?)
        ",
    )
    .bind(&payload.name)
    .bind(payload.photographer_id)
    .execute(db.pool())
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!(folder_id = id, photographer_id = payload.photographer_id, "folder created");

    Ok(AppSuccess::Created(id).into_response())
}

#[utoipa::path(
    get,
    path = "/folders",
    tag = "Folders",
    responses(
        (status = 200, description = "All folders", body = [Folder]),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/folders")]
pub async fn get_folders(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let folders = sqlx::query_as::<_, Folder>(
        "SELECT id, name, photographer_id FROM folders ORDER BY id",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(HttpResponse::Ok().json(folders))
}

#[utoipa::path(
    get,
    path = "/folders/{id}",
    tag = "Folders",
    params(("id" = i64, Path, description = "Folder id")),
    responses(
        (status = 200, description = "Folder found", body = Folder),
        (status = 404, description = "Folder not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/folders/{id}")]
pub async fn get_folder(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let folder = sqlx::query_as::<_, Folder>(
        "SELECT id, name, photographer_id FROM folders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?
    .ok_or(AppError::NotFound(Resource::Folder))?;

    Ok(HttpResponse::Ok().json(folder))
}

#[utoipa::path(
    put,
    path = "/folders/{id}",
    tag = "Folders",
    params(("id" = i64, Path, description = "Folder id")),
    request_body = FolderRequest,
    responses(
        (status = 200, description = "Folder replaced", body = UpdatedResponse),
        (status = 404, description = "Folder not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[put("/folders/{id}")]
pub async fn update_folder(
    db: web::Data<Database>,
    path: web::Path<i64>,
    payload: Payload<FolderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let result = sqlx::query(
        "
        UPDATE folders
        SET name = ?, photographer_id = ?
        WHERE id = ?
        ",
    )
    .bind(&payload.name)
    .bind(payload.photographer_id)
    .bind(id)
    .execute(db.pool())
    .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Folder)),
        n => Ok(AppSuccess::Updated(n).into_response()),
    }
}

/// Albums in the folder are not deleted.
#[utoipa::path(
    delete,
    path = "/folders/{id}",
    tag = "Folders",
    params(("id" = i64, Path, description = "Folder id")),
    responses(
        (status = 200, description = "Folder deleted", body = DeletedResponse),
        (status = 404, description = "Folder not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[delete("/folders/{id}")]
pub async fn delete_folder(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM folders WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Folder)),
        n => {
            tracing::info!(folder_id = id, "folder deleted");
            Ok(AppSuccess::Deleted(n).into_response())
        }
    }
}

/// An empty result is reported as 404, whether or not the photographer exists.
#[utoipa::path(
    get,
    path = "/folders/{photographer_id}/folders",
    tag = "Folders",
    params(("photographer_id" = i64, Path, description = "Owning photographer id")),
    responses(
        (status = 200, description = "Folders of the photographer", body = [Folder]),
        (status = 404, description = "No folders for this photographer", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/folders/{photographer_id}/folders")]
pub async fn get_folders_by_photographer(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let photographer_id = path.into_inner();

    let folders = sqlx::query_as::<_, Folder>(
        "
        SELECT
            id,
            name,
            photographer_id
        FROM
            folders
        WHERE
            photographer_id = ?
        ORDER BY id
        ",
    )
    .bind(photographer_id)
    .fetch_all(db.pool())
    .await?;

    if folders.is_empty() {
        return Err(AppError::EmptyListing(Listing::FoldersOfPhotographer));
    }

    Ok(HttpResponse::Ok().json(folders))
}

/// An empty result is reported as 404, whether or not the folder exists.
#[utoipa::path(
    get,
    path = "/folders/{folder_id}/albums",
    tag = "Folders",
    params(("folder_id" = i64, Path, description = "Containing folder id")),
    responses(
        (status = 200, description = "Albums of the folder", body = [AlbumSummary]),
        (status = 404, description = "Folder not found or has no albums", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/folders/{folder_id}/albums")]
pub async fn get_albums_by_folder(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let folder_id = path.into_inner();

    let albums = sqlx::query_as::<_, AlbumSummary>(
        "
        SELECT
            id,
            access_hash,
            download_count,
            download_limit,
            folder_id
        FROM
            albums
        WHERE
            folder_id = ?
        ORDER BY id
        ",
    )
    .bind(folder_id)
    .fetch_all(db.pool())
    .await?;

    if albums.is_empty() {
        return Err(AppError::EmptyListing(Listing::AlbumsOfFolder));
    }

    Ok(HttpResponse::Ok().json(albums))
}
