use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use super::common::{app_config, database, seed_album, seed_photo};

fn assert_access_hash(value: &Value) {
    let hash = value.as_str().expect("access_hash is a string");
    assert_eq!(hash.len(), 6, "unexpected access_hash: {hash}");
    let number: u32 = hash.parse().expect("access_hash is numeric");
    assert!((100_000..=999_999).contains(&number));
}

#[actix_web::test]
async fn test_create_album_generates_access_hash() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/albums")
        .set_json(json!({
            "download_count": 0,
            "download_limit": 10,
            "folder_id": 1,
            "name": "X"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/albums/{id}"))
        .to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert_access_hash(&row["access_hash"]);
    assert_eq!(row["id"], id);
    assert_eq!(row["download_count"], 0);
    assert_eq!(row["download_limit"], 10);
    assert_eq!(row["folder_id"], 1);
    assert_eq!(row["name"], "X");
}

#[actix_web::test]
async fn test_download_counters_default_to_zero() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/albums")
        .set_json(json!({ "folder_id": 2, "name": "Defaults" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/albums/{id}"))
        .to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row["download_count"], 0);
    assert_eq!(row["download_limit"], 0);
}

#[actix_web::test]
async fn test_list_albums() {
    let db = database().await;
    let first = seed_album(&db, "First", 1).await;
    let second = seed_album(&db, "Second", 2).await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::get().uri("/albums").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[actix_web::test]
async fn test_update_replaces_access_hash() {
    let db = database().await;
    let id = seed_album(&db, "Old", 1).await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/albums/{id}"))
        .set_json(json!({
            "access_hash": "abc123",
            "download_count": 10,
            "download_limit": 100,
            "folder_id": 3,
            "name": "New"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "updated": 1 }));

    let req = test::TestRequest::get()
        .uri(&format!("/albums/{id}"))
        .to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        row,
        json!({
            "id": id,
            "access_hash": "abc123",
            "download_count": 10,
            "download_limit": 100,
            "folder_id": 3,
            "name": "New"
        })
    );
}

#[actix_web::test]
async fn test_update_unknown_album_is_not_found() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::put()
        .uri("/albums/5")
        .set_json(json!({
            "access_hash": "111111",
            "download_count": 0,
            "download_limit": 0,
            "folder_id": 1,
            "name": "Ghost"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/albums").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows, json!([]));
}

#[actix_web::test]
async fn test_delete_album_twice_keeps_photos() {
    let db = database().await;
    let album_id = seed_album(&db, "Ensaio", 1).await;
    let photo_id = seed_photo(&db, "https://cdn.example/1.jpg", album_id).await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/albums/{album_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "deleted": 1 }));

    let req = test::TestRequest::delete()
        .uri(&format!("/albums/{album_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Album not found" }));

    let req = test::TestRequest::get()
        .uri(&format!("/photos/{photo_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_found() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::get().uri("/albums/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
