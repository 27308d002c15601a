use actix_web::{delete, get, post, put, web, HttpResponse};

use super::Payload;
use crate::db::Database;
use crate::message::{
    AppError, AppSuccess, CreatedResponse, DeletedResponse, ErrorBody, MessageBody, Resource,
    UpdatedResponse,
};
use crate::models::{Album, AlbumCreateRequest, AlbumUpdateRequest};
use crate::utils::access_hash::generate_access_hash;

/// The access hash is drawn at random and may repeat an existing album's.
#[utoipa::path(
    post,
    path = "/albums",
    tag = "Albums",
    request_body = AlbumCreateRequest,
    responses(
        (status = 201, description = "Album created", body = CreatedResponse),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[post("/albums")]
pub async fn create_album(
    db: web::Data<Database>,
    payload: Payload<AlbumCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let access_hash = generate_access_hash();

    let result = sqlx::query(
        "
        INSERT INTO albums
            (access_hash, download_count, download_limit, folder_id, name)
        VALUES
            (?, ?, ?, ?, ?)
        ",
    )
    .bind(&access_hash)
    .bind(payload.download_count)
    .bind(payload.download_limit)
    .bind(payload.folder_id)
    .bind(&payload.name)
    .execute(db.pool())
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!(album_id = id, folder_id = payload.folder_id, "album created");

    Ok(AppSuccess::Created(id).into_response())
}

#[utoipa::path(
    get,
    path = "/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "All albums", body = [Album]),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/albums")]
pub async fn get_albums(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let albums = sqlx::query_as::<_, Album>(
        "
        SELECT
            id,
            access_hash,
            download_count,
            download_limit,
            folder_id,
            name
        FROM
            albums
        ORDER BY id
        ",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(HttpResponse::Ok().json(albums))
}

#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = i64, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album found", body = Album),
        (status = 404, description = "Album not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/albums/{id}")]
pub async fn get_album(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let album = sqlx::query_as::<_, Album>(
        "
        SELECT
            id,
            access_hash,
            download_count,
            download_limit,
            folder_id,
            name
        FROM
            albums
        WHERE
            id = ?
        ",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?
    .ok_or(AppError::NotFound(Resource::Album))?;

    Ok(HttpResponse::Ok().json(album))
}

/// Full replace, including the access hash.
#[utoipa::path(
    put,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = i64, Path, description = "Album id")),
    request_body = AlbumUpdateRequest,
    responses(
        (status = 200, description = "Album replaced", body = UpdatedResponse),
        (status = 404, description = "Album not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[put("/albums/{id}")]
pub async fn update_album(
    db: web::Data<Database>,
    path: web::Path<i64>,
    payload: Payload<AlbumUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let result = sqlx::query(
        "
        UPDATE albums
        SET
            access_hash = ?,
            download_count = ?,
            download_limit = ?,
            folder_id = ?,
            name = ?
        WHERE
            id = ?
        ",
    )
    .bind(&payload.access_hash)
    .bind(payload.download_count)
    .bind(payload.download_limit)
    .bind(payload.folder_id)
    .bind(&payload.name)
    .bind(id)
    .execute(db.pool())
    .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Album)),
        n => Ok(AppSuccess::Updated(n).into_response()),
    }
}

/// Photos in the album are not deleted.
#[utoipa::path(
    delete,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = i64, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album deleted", body = DeletedResponse),
        (status = 404, description = "Album not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[delete("/albums/{id}")]
pub async fn delete_album(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Album)),
        n => {
            tracing::info!(album_id = id, "album deleted");
            Ok(AppSuccess::Deleted(n).into_response())
        }
    }
}
