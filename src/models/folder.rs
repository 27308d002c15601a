use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub photographer_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FolderRequest {
    pub name: String,
    pub photographer_id: i64,
}
