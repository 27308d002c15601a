use actix_web::{delete, get, post, put, web, HttpResponse};

use super::Payload;
use crate::db::Database;
use crate::message::{
    AppError, AppSuccess, CreatedResponse, DeletedResponse, ErrorBody, Listing, MessageBody,
    Resource, UpdatedResponse,
};
use crate::models::{Photo, PhotoRequest};

#[utoipa::path(
    post,
    path = "/photos",
    tag = "Photos",
    request_body = PhotoRequest,
    responses(
        (status = 201, description = "Photo created", body = CreatedResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[post("/photos")]
pub async fn create_photo(
    db: web::Data<Database>,
    payload: Payload<PhotoRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();

    let result = sqlx::query(
        "
        INSERT INTO photos (url, album_id)
        VALUES (?, ?)
        ",
    )
    .bind(&payload.url)
    .bind(payload.album_id)
    .execute(db.pool())
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!(photo_id = id, album_id = payload.album_id, "photo created");

    Ok(AppSuccess::Created(id).into_response())
}

#[utoipa::path(
    get,
    path = "/photos",
    tag = "Photos",
    responses(
        (status = 200, description = "All photos", body = [Photo]),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/photos")]
pub async fn get_photos(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let photos = sqlx::query_as::<_, Photo>("SELECT id, url, album_id FROM photos ORDER BY id")
        .fetch_all(db.pool())
        .await?;

    Ok(HttpResponse::Ok().json(photos))
}

#[utoipa::path(
    get,
    path = "/photos/{id}",
    tag = "Photos",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo found", body = Photo),
        (status = 404, description = "Photo not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/photos/{id}")]
pub async fn get_photo(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let photo = sqlx::query_as::<_, Photo>("SELECT id, url, album_id FROM photos WHERE id = ?")
        .bind(id)
        .fetch_optional(db.pool())
        .await?
        .ok_or(AppError::NotFound(Resource::Photo))?;

    Ok(HttpResponse::Ok().json(photo))
}

#[utoipa::path(
    put,
    path = "/photos/{id}",
    tag = "Photos",
    params(("id" = i64, Path, description = "Photo id")),
    request_body = PhotoRequest,
    responses(
        (status = 200, description = "Photo replaced", body = UpdatedResponse),
        (status = 404, description = "Photo not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[put("/photos/{id}")]
pub async fn update_photo(
    db: web::Data<Database>,
    path: web::Path<i64>,
    payload: Payload<PhotoRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let result = sqlx::query(
        "
        UPDATE photos
        SET url = ?, album_id = ?
        WHERE id = ?
        ",
    )
    .bind(&payload.url)
    .bind(payload.album_id)
    .bind(id)
    .execute(db.pool())
    .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Photo)),
        n => Ok(AppSuccess::Updated(n).into_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/photos/{id}",
    tag = "Photos",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo deleted", body = DeletedResponse),
        (status = 404, description = "Photo not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[delete("/photos/{id}")]
pub async fn delete_photo(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM photos WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Photo)),
        n => {
            tracing::info!(photo_id = id, "photo deleted");
            Ok(AppSuccess::Deleted(n).into_response())
        }
    }
}

/// An empty result is reported as 404, whether or not the album exists.
#[utoipa::path(
    get,
    path = "/photos/{album_id}/photos",
    tag = "Photos",
    params(("album_id" = i64, Path, description = "Containing album id")),
    responses(
        (status = 200, description = "Photos of the album", body = [Photo]),
        (status = 404, description = "No photos for this album", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/photos/{album_id}/photos")]
pub async fn get_photos_by_album(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();

    let photos = sqlx::query_as::<_, Photo>(
        "
        SELECT
            id,
            url,
            album_id
        FROM
            photos
        WHERE
            album_id = ?
        ORDER BY id
        ",
    )
    .bind(album_id)
    .fetch_all(db.pool())
    .await?;

    if photos.is_empty() {
        return Err(AppError::EmptyListing(Listing::PhotosOfAlbum));
    }

    Ok(HttpResponse::Ok().json(photos))
}
