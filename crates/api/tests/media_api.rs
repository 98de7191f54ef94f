mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use serde_json::json;
use folio_api::config::ServerConfig;
use tower::ServiceExt;

const BOUNDARY: &str = "folio-test-boundary";

/// Encode a single-file multipart body with optional text fields.
fn multipart_body(
    filename: &str,
    content_type: &str,
    data: &[u8],
    fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn upload(
    pool: &sqlx::PgPool,
    config: &ServerConfig,
    filename: &str,
    content_type: &str,
    data: &[u8],
    fields: &[(&str, &str)],
) -> axum::http::Response<Body> {
    let app = common::build_test_app_with(pool.clone(), config);
    let request = Request::post("/api/admin/media")
        .header(AUTHORIZATION, format!("Bearer {}", common::admin_token()))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(filename, content_type, data, fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

/// An uploaded file is stored and served back from its public URL.
#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_then_serve_file(pool: sqlx::PgPool) {
    let config = common::test_config();
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, "Gallery", true).await;
    let post_id = post["id"].as_str().unwrap();

    let png = b"\x89PNG\r\n\x1a\nfake-image-bytes";
    let response = upload(
        &pool,
        &config,
        "cover.png",
        "image/png",
        png,
        &[("postId", post_id), ("altTextEn", "Cover"), ("altTextPl", "Okładka")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = common::body_json(response).await;
    let media = &json["data"];
    assert_eq!(media["type"], "IMAGE");
    assert_eq!(media["postId"], post_id);
    assert_eq!(media["originalName"], "cover.png");
    assert_eq!(media["size"], png.len());
    let url = media["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/api/media/images/"));
    assert!(url.ends_with(".png"));

    let app = common::build_test_app_with(pool.clone(), &config);
    let response = common::get(app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(common::body_bytes(response).await, png.to_vec());

    // The post detail view carries the gallery with localized alt text.
    let app = common::build_test_app(pool);
    let json = common::body_json(common::get_lang(app, "/api/posts/gallery", "pl").await).await;
    assert_eq!(json["data"]["media"][0]["altText"], "Okładka");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_rejects_disallowed_type(pool: sqlx::PgPool) {
    let response = upload(
        &pool,
        &common::test_config(),
        "run.exe",
        "application/x-msdownload",
        b"MZ",
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_to_unknown_post_returns_404(pool: sqlx::PgPool) {
    let missing = uuid::Uuid::new_v4().to_string();
    let response = upload(
        &pool,
        &common::test_config(),
        "a.png",
        "image/png",
        b"png",
        &[("postId", missing.as_str())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn serving_missing_file_returns_404(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/media/images/nope.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn youtube_link_becomes_embed(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::send_auth(
        app,
        axum::http::Method::POST,
        "/api/admin/media/youtube?videoUrl=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ",
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = common::body_json(response).await;
    assert_eq!(json["data"]["type"], "YOUTUBE");
    assert_eq!(json["data"]["url"], "https://www.youtube.com/embed/dQw4w9WgXcQ");
    assert_eq!(json["data"]["videoUrl"], "https://youtu.be/dQw4w9WgXcQ");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn youtube_rejects_other_urls(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::send_auth(
        app,
        axum::http::Method::POST,
        "/api/admin/media/youtube?videoUrl=https%3A%2F%2Fvimeo.com%2F123",
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Library management
// ---------------------------------------------------------------------------

/// Unattached media cannot be moved within a gallery.
#[sqlx::test(migrations = "../../db/migrations")]
async fn moving_unassigned_media_returns_400(pool: sqlx::PgPool) {
    let response = upload(
        &pool,
        &common::test_config(),
        "loose.png",
        "image/png",
        b"png",
        &[],
    )
    .await;
    let id = common::body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/media/{id}/move"),
        json!({ "toIndex": 0 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = common::body_json(
        common::get_auth(app, "/api/admin/media/unassigned", &common::admin_token()).await,
    )
    .await;
    assert_eq!(json["data"]["totalElements"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_media_removes_file(pool: sqlx::PgPool) {
    let config = common::test_config();
    let response = upload(&pool, &config, "gone.png", "image/png", b"png", &[]).await;
    let json = common::body_json(response).await;
    let id = json["data"]["id"].as_str().unwrap().to_string();
    let url = json["data"]["url"].as_str().unwrap().to_string();

    let app = common::build_test_app_with(pool.clone(), &config);
    let response = common::get(app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app_with(pool.clone(), &config);
    let response =
        common::delete_auth(app, &format!("/api/admin/media/{id}"), &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app_with(pool, &config);
    let response = common::get(app, &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Gallery ordering
// ---------------------------------------------------------------------------

const VIDEO_IDS: [&str; 3] = ["aaaaaaaaaaa", "bbbbbbbbbbb", "ccccccccccc"];

/// Attach a YouTube item to `post_id` and return the new media id.
async fn attach_video(pool: &sqlx::PgPool, post_id: &str, video_id: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = common::send_auth(
        app,
        axum::http::Method::POST,
        &format!("/api/admin/media/youtube?videoUrl=https%3A%2F%2Fyoutu.be%2F{video_id}&postId={post_id}"),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    common::body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// A post with three gallery items, returned as `(post_id, media_ids)`.
async fn gallery_post(pool: &sqlx::PgPool, title: &str) -> (String, Vec<String>) {
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, title, true).await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let mut ids = Vec::new();
    for video_id in VIDEO_IDS {
        ids.push(attach_video(pool, &post_id, video_id).await);
    }
    (post_id, ids)
}

/// Media ids of a post's gallery as the detail view orders them.
async fn gallery_ids(pool: &sqlx::PgPool, post_id: &str) -> Vec<String> {
    let app = common::build_test_app(pool.clone());
    let json = common::body_json(
        common::get_auth(app, &format!("/api/admin/posts/{post_id}"), &common::admin_token()).await,
    )
    .await;
    json["data"]["media"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_reorder_persists(pool: sqlx::PgPool) {
    let (post_id, ids) = gallery_post(&pool, "Gallery").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/media/reorder?postId={post_id}"),
        json!({ "items": [
            { "id": ids[2], "displayOrder": 0 },
            { "id": ids[0], "displayOrder": 1 },
            { "id": ids[1], "displayOrder": 2 },
        ]}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["message"], "Order updated successfully");

    assert_eq!(
        gallery_ids(&pool, &post_id).await,
        vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]
    );
}

/// Media belonging to another post is outside the gallery being reordered.
#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_reorder_with_foreign_media_changes_nothing(pool: sqlx::PgPool) {
    let (post_id, ids) = gallery_post(&pool, "Gallery").await;
    let app = common::build_test_app(pool.clone());
    let other = common::create_post(app, "Other", true).await;
    let foreign = attach_video(&pool, other["id"].as_str().unwrap(), "ddddddddddd").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/media/reorder?postId={post_id}"),
        json!({ "items": [
            { "id": ids[2], "displayOrder": 0 },
            { "id": foreign, "displayOrder": 1 },
            { "id": ids[0], "displayOrder": 2 },
        ]}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(gallery_ids(&pool, &post_id).await, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_move_renumbers_within_post(pool: sqlx::PgPool) {
    let (post_id, ids) = gallery_post(&pool, "Gallery").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/media/{}/move", ids[0]),
        json!({ "toIndex": 2 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let items = json["data"].as_array().unwrap();
    let moved: Vec<&str> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    let orders: Vec<i64> = items
        .iter()
        .map(|i| i["displayOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(moved, vec![ids[1].as_str(), ids[2].as_str(), ids[0].as_str()]);
    assert_eq!(orders, vec![0, 1, 2]);

    assert_eq!(
        gallery_ids(&pool, &post_id).await,
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
    );
}
