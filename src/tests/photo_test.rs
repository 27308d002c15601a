use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use super::common::{app_config, database, seed_photo};

#[actix_web::test]
async fn test_create_then_get_photo() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/photos")
        .set_json(json!({ "url": "https://cdn.example/1.jpg", "album_id": 4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/photos/{id}"))
        .to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        row,
        json!({ "id": id, "url": "https://cdn.example/1.jpg", "album_id": 4 })
    );
}

#[actix_web::test]
async fn test_create_photo_from_form() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/photos")
        .set_form(vec![("url", "https://cdn.example/2.jpg"), ("album_id", "7")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/photos").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["album_id"], 7);
    assert_eq!(rows[0]["url"], "https://cdn.example/2.jpg");
}

#[actix_web::test]
async fn test_form_without_album_is_rejected() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/photos")
        .set_form(vec![("url", "https://cdn.example/2.jpg")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("album_id"), "{error}");

    let req = test::TestRequest::get().uri("/photos").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows, json!([]));
}

#[actix_web::test]
async fn test_update_and_delete_photo() {
    let db = database().await;
    let id = seed_photo(&db, "https://cdn.example/old.jpg", 1).await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/photos/{id}"))
        .set_json(json!({ "url": "https://cdn.example/new.jpg", "album_id": 2 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "updated": 1 }));

    let req = test::TestRequest::get()
        .uri(&format!("/photos/{id}"))
        .to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row["url"], "https://cdn.example/new.jpg");
    assert_eq!(row["album_id"], 2);

    let req = test::TestRequest::delete()
        .uri(&format!("/photos/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "deleted": 1 }));

    let req = test::TestRequest::get()
        .uri(&format!("/photos/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Photo not found" }));
}

#[actix_web::test]
async fn test_update_unknown_photo_is_not_found() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::put()
        .uri("/photos/5")
        .set_json(json!({ "url": "https://cdn.example/x.jpg", "album_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Photo not found" }));

    let req = test::TestRequest::get().uri("/photos").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows, json!([]));
}

#[actix_web::test]
async fn test_photos_by_album_filters_on_album() {
    let db = database().await;
    let first = seed_photo(&db, "https://cdn.example/a.jpg", 1).await;
    seed_photo(&db, "https://cdn.example/b.jpg", 2).await;
    let third = seed_photo(&db, "https://cdn.example/c.jpg", 1).await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::get().uri("/photos/1/photos").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rows: Value = test::read_body_json(resp).await;
    assert_eq!(
        rows,
        json!([
            { "id": first, "url": "https://cdn.example/a.jpg", "album_id": 1 },
            { "id": third, "url": "https://cdn.example/c.jpg", "album_id": 1 }
        ])
    );
}

#[actix_web::test]
async fn test_photos_by_album_without_photos_is_not_found() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::get().uri("/photos/8/photos").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "No photos found for this album." }));
}

#[actix_web::test]
async fn test_mistyped_field_is_rejected() {
    let db = database().await;
    let app = test::init_service(App::new().configure(app_config(&db))).await;

    let req = test::TestRequest::post()
        .uri("/photos")
        .set_json(json!({ "url": "https://cdn.example/1.jpg", "album_id": "seven" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
