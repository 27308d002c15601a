use std::fmt;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::PhotographerSummary;

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Resource {
    Photographer,
    Folder,
    Album,
    Photo,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Photographer => write!(f, "Photographer"),
            Resource::Folder => write!(f, "Folder"),
            Resource::Album => write!(f, "Album"),
            Resource::Photo => write!(f, "Photo"),
        }
    }
}

/// Child listings filtered by a parent id.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Listing {
    FoldersOfPhotographer,
    AlbumsOfFolder,
    PhotosOfAlbum,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::FoldersOfPhotographer => write!(f, "No folders found for this photographer."),
            Listing::AlbumsOfFolder => write!(f, "Folder not found or has no albums."),
            Listing::PhotosOfAlbum => write!(f, "No photos found for this album."),
        }
    }
}

#[derive(Debug)]
pub enum AppSuccess {
    Created(i64),
    Updated(u64),
    Deleted(u64),
    LoggedIn(PhotographerSummary),
}

const LOGIN_MESSAGE: &str = "Login successful.";

impl AppSuccess {
    pub fn into_response(self) -> HttpResponse {
        match self {
            AppSuccess::Created(id) => HttpResponse::Created().json(CreatedResponse { id }),
            AppSuccess::Updated(updated) => HttpResponse::Ok().json(UpdatedResponse { updated }),
            AppSuccess::Deleted(deleted) => HttpResponse::Ok().json(DeletedResponse { deleted }),
            AppSuccess::LoggedIn(photographer) => HttpResponse::Ok().json(LoginResponse {
                message: LOGIN_MESSAGE.to_string(),
                photographer,
            }),
        }
    }
}

#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{} not found", _0)]
    NotFound(Resource),
    #[display(fmt = "{}", _0)]
    EmptyListing(Listing),
    #[display(fmt = "Invalid credentials.")]
    InvalidCredentials,
    #[display(fmt = "{}", _0)]
    Database(sqlx::Error),
    #[display(fmt = "{}", _0)]
    PasswordHash(bcrypt::BcryptError),
    #[display(fmt = "{}", _0)]
    Blocking(BlockingError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::PasswordHash(err)
    }
}

impl From<BlockingError> for AppError {
    fn from(err: BlockingError) -> Self {
        AppError::Blocking(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::EmptyListing(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::PasswordHash(_) | AppError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(_) | AppError::PasswordHash(_) | AppError::Blocking(_) => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: self.to_string(),
                })
            }
            _ => {
                tracing::debug!(reason = %self, "request rejected");
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: self.to_string(),
                })
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

/// Body of every 500 and of rejected request payloads.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub photographer: PhotographerSummary,
}
