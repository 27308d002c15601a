use actix_web::web;

use crate::db::Database;
use crate::routes;
use crate::utils::password::PasswordScheme;

pub async fn database() -> Database {
    Database::connect_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

pub fn app_config(db: &Database) -> impl FnOnce(&mut web::ServiceConfig) {
    routes::configure(web::Data::new(db.clone()), PasswordScheme::Plain)
}

pub fn app_config_with(db: &Database, scheme: PasswordScheme) -> impl FnOnce(&mut web::ServiceConfig) {
    routes::configure(web::Data::new(db.clone()), scheme)
}

pub async fn seed_photographer(db: &Database, email: &str) -> i64 {
    sqlx::query(
        "
        INSERT INTO photographers
            (name, email, password, document, company_name, logo, description)
        VALUES
            (?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind("Seeded")
    .bind(email)
    .bind("p")
    .bind("1")
    .bind("C")
    .bind("l")
    .bind("d")
    .execute(db.pool())
    .await
    .expect("Failed to seed photographer")
    .last_insert_rowid()
}

pub async fn seed_folder(db: &Database, name: &str, photographer_id: i64) -> i64 {
    sqlx::query("INSERT INTO folders (name, photographer_id) VALUES (?, ?)")
        .bind(name)
        .bind(photographer_id)
        .execute(db.pool())
        .await
        .expect("Failed to seed folder")
        .last_insert_rowid()
}

pub async fn seed_album(db: &Database, name: &str, folder_id: i64) -> i64 {
    sqlx::query(
        "
        INSERT INTO albums (access_hash, download_count, download_limit, folder_id, name)
        VALUES ('123456', 0, 0, ?, ?)
        ",
    )
    .bind(folder_id)
    .bind(name)
    .execute(db.pool())
    .await
    .expect("Failed to seed album")
    .last_insert_rowid()
}

pub async fn seed_photo(db: &Database, url: &str, album_id: i64) -> i64 {
    sqlx::query("INSERT INTO photos (url, album_id) VALUES (?, ?)")
        .bind(url)
        .bind(album_id)
        .execute(db.pool())
        .await
        .expect("Failed to seed photo")
        .last_insert_rowid()
}
