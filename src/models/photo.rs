use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Photo {
    pub id: i64,
    pub url: String,
    pub album_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PhotoRequest {
    pub url: String,
    pub album_id: i64,
}
