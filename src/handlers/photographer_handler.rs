use actix_web::{delete, get, post, put, web, HttpResponse};

use super::Payload;
use crate::db::Database;
use crate::message::{
    AppError, AppSuccess, CreatedResponse, DeletedResponse, ErrorBody, LoginResponse, MessageBody,
    Resource, UpdatedResponse,
};
use crate::models::{LoginRequest, Photographer, PhotographerRequest};
use crate::utils::password::PasswordScheme;

const SELECT_PHOTOGRAPHER: &str = "
    SELECT
        id,
        name,
        email,
        password,
        document,
        company_name,
        logo,
        description
    FROM
        photographers
";

#[utoipa::path(
    post,
    path = "/photographers",
    tag = "Photographers",
    request_body = PhotographerRequest,
    responses(
        (status = 201, description = "Photographer created", body = CreatedResponse),
        (status = 500, description = "Storage error, e.g. duplicate email", body = ErrorBody)
    )
)]
#[post("/photographers")]
pub async fn create_photographer(
    db: web::Data<Database>,
    scheme: web::Data<PasswordScheme>,
    payload: Payload<PhotographerRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let password = scheme.seal_off_thread(payload.password.clone()).await?;

    let result = sqlx::query(
        "
        INSERT INTO photographers
            (name, email, password, document, company_name, logo, description)
        VALUES
            (?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&password)
    .bind(&payload.document)
    .bind(&payload.company_name)
    .bind(&payload.logo)
    .bind(&payload.description)
    .execute(db.pool())
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!(photographer_id = id, "photographer created");

    Ok(AppSuccess::Created(id).into_response())
}

/// Email/password check. Unknown email and wrong password get the same answer.
#[utoipa::path(
    post,
    path = "/photographers/login",
    tag = "Photographers",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[post("/photographers/login")]
pub async fn login(
    db: web::Data<Database>,
    scheme: web::Data<PasswordScheme>,
    payload: Payload<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();

    let photographer = sqlx::query_as::<_, Photographer>(&format!(
        "{SELECT_PHOTOGRAPHER} WHERE email = ?"
    ))
    .bind(&payload.email)
    .fetch_optional(db.pool())
    .await?;

    let accepted = match &photographer {
        Some(photographer) => {
            scheme
                .verify_off_thread(payload.password, photographer.password.clone())
                .await?
        }
        None => false,
    };

    match photographer {
        Some(photographer) if accepted => {
            tracing::info!(photographer_id = photographer.id, "login accepted");
            Ok(AppSuccess::LoggedIn(photographer.into()).into_response())
        }
        _ => {
            tracing::info!("login rejected");
            Err(AppError::InvalidCredentials)
        }
    }
}

#[utoipa::path(
    get,
    path = "/photographers",
    tag = "Photographers",
    responses(
        (status = 200, description = "All photographers", body = [Photographer]),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/photographers")]
pub async fn get_photographers(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let photographers = sqlx::query_as::<_, Photographer>(&format!(
        "{SELECT_PHOTOGRAPHER} ORDER BY id"
    ))
    .fetch_all(db.pool())
    .await?;

    Ok(HttpResponse::Ok().json(photographers))
}

#[utoipa::path(
    get,
    path = "/photographers/{id}",
    tag = "Photographers",
    params(("id" = i64, Path, description = "Photographer id")),
    responses(
        (status = 200, description = "Photographer found", body = Photographer),
        (status = 404, description = "Photographer not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[get("/photographers/{id}")]
pub async fn get_photographer(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let photographer = sqlx::query_as::<_, Photographer>(&format!(
        "{SELECT_PHOTOGRAPHER} WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(db.pool())
    .await?
    .ok_or(AppError::NotFound(Resource::Photographer))?;

    Ok(HttpResponse::Ok().json(photographer))
}

#[utoipa::path(
    put,
    path = "/photographers/{id}",
    tag = "Photographers",
    params(("id" = i64, Path, description = "Photographer id")),
    request_body = PhotographerRequest,
    responses(
        (status = 200, description = "Photographer replaced", body = UpdatedResponse),
        (status = 404, description = "Photographer not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[put("/photographers/{id}")]
pub async fn update_photographer(
    db: web::Data<Database>,
    scheme: web::Data<PasswordScheme>,
    path: web::Path<i64>,
    payload: Payload<PhotographerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let password = scheme.seal_off_thread(payload.password.clone()).await?;

    let result = sqlx::query(
        "
        UPDATE photographers
        SET
            name = ?,
            email = ?,
            password = ?,
            document = ?,
            company_name = ?,
            logo = ?,
            description = ?
        WHERE
            id = ?
        ",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&password)
    .bind(&payload.document)
    .bind(&payload.company_name)
    .bind(&payload.logo)
    .bind(&payload.description)
    .bind(id)
    .execute(db.pool())
    .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Photographer)),
        n => Ok(AppSuccess::Updated(n).into_response()),
    }
}

/// Folders owned by the photographer are left in place.
#[utoipa::path(
    delete,
    path = "/photographers/{id}",
    tag = "Photographers",
    params(("id" = i64, Path, description = "Photographer id")),
    responses(
        (status = 200, description = "Photographer deleted", body = DeletedResponse),
        (status = 404, description = "Photographer not found", body = MessageBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    )
)]
#[delete("/photographers/{id}")]
pub async fn delete_photographer(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM photographers WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;

    match result.rows_affected() {
        0 => Err(AppError::NotFound(Resource::Photographer)),
        n => {
            tracing::info!(photographer_id = id, "photographer deleted");
            Ok(AppSuccess::Deleted(n).into_response())
        }
    }
}
