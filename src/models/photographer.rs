use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Photographer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub document: String,
    pub company_name: String,
    pub logo: String,
    pub description: String,
}

/// Body of both create and full-replace update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PhotographerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub document: String,
    pub company_name: String,
    pub logo: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// What a successful login reveals about the photographer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotographerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Photographer> for PhotographerSummary {
    fn from(photographer: Photographer) -> Self {
        PhotographerSummary {
            id: photographer.id,
            name: photographer.name,
            email: photographer.email,
        }
    }
}
