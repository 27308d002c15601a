use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Album {
    pub id: i64,
    pub access_hash: String,
    pub download_count: i64,
    pub download_limit: i64,
    pub folder_id: i64,
    pub name: String,
}

/// Album row as listed under its folder; the name is not part of the listing.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AlbumSummary {
    pub id: i64,
    pub access_hash: String,
    pub download_count: i64,
    pub download_limit: i64,
    pub folder_id: i64,
}

/// The access hash is generated server-side on create.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AlbumCreateRequest {
    #[serde(default)]
    pub download_count: i64,
    #[serde(default)]
    pub download_limit: i64,
    pub folder_id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AlbumUpdateRequest {
    pub access_hash: String,
    #[serde(default)]
    pub download_count: i64,
    #[serde(default)]
    pub download_limit: i64,
    pub folder_id: i64,
    pub name: String,
}
