mod common;

use axum::http::StatusCode;
use serde_json::json;

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// Creating a post derives the slug from the English title.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_post_returns_201_with_slug(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, "Hello World", false).await;
    assert_eq!(post["slug"], "hello-world");
    assert_eq!(post["published"], false);
    assert_eq!(post["categoryLabel"], "Personal Project");

    // Same title again gets a suffixed slug.
    let app = common::build_test_app(pool);
    let second = common::create_post(app, "Hello World", false).await;
    assert_eq!(second["slug"], "hello-world-1");
}

/// Field errors are reported by their JSON names.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_post_validation_errors_map_fields(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "category": "PERSONAL_PROJECT",
        "titleEn": "  ",
        "titlePl": "Tytuł",
    });
    let response =
        common::post_json_auth(app, "/api/admin/posts", body, &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"]["titleEn"], "English title is required");
    assert!(json["errors"].get("titlePl").is_none());
}

/// Content must be a rich-text document.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_post_rejects_non_document_content(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "category": "PROFESSIONAL_PROJECT",
        "titleEn": "Title",
        "titlePl": "Tytuł",
        "contentEn": "plain string",
    });
    let response =
        common::post_json_auth(app, "/api/admin/posts", body, &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert!(json["errors"].get("contentEn").is_some());
}

/// Malformed JSON comes back in the standard envelope.
#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_category_returns_400(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "category": "HOBBY", "titleEn": "A", "titlePl": "B" });
    let response =
        common::post_json_auth(app, "/api/admin/posts", body, &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_post_changes_slug_and_title(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, "Original", true).await;
    let id = post["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::put_json_auth(
        app,
        &format!("/api/admin/posts/{id}"),
        json!({ "titleEn": "Renamed", "slug": "Renamed Post" }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["data"]["titleEn"], "Renamed");
    assert_eq!(json["data"]["slug"], "renamed-post");
    assert_eq!(json["message"], "Post updated successfully");

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/posts/renamed-post").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_post_returns_404(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::put_json_auth(
        app,
        &format!("/api/admin/posts/{}", uuid::Uuid::new_v4()),
        json!({ "titleEn": "Nope" }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_post_removes_it(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, "Doomed", true).await;
    let id = post["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        common::delete_auth(app, &format!("/api/admin/posts/{id}"), &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/posts/doomed").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response =
        common::delete_auth(app, &format!("/api/admin/posts/{id}"), &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Publishing and public views
// ---------------------------------------------------------------------------

/// Drafts are invisible publicly until toggled.
#[sqlx::test(migrations = "../../db/migrations")]
async fn unpublished_posts_are_hidden_until_toggled(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let post = common::create_post(app, "Draft", false).await;
    let id = post["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/posts/draft").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let json = common::body_json(common::get(app, "/api/posts").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/posts/{id}/publish"),
        json!({}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["published"], true);
    assert_eq!(json["message"], "Post published successfully");

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/posts/draft").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Admin listing sees drafts too.
    let app = common::build_test_app(pool.clone());
    common::create_post(app, "Second draft", false).await;
    let app = common::build_test_app(pool);
    let json =
        common::body_json(common::get_auth(app, "/api/admin/posts", &common::admin_token()).await)
            .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// `Accept-Language: pl` switches the localized fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn polish_locale_picks_polish_fields(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    common::create_post(app, "Weather", true).await;

    let app = common::build_test_app(pool.clone());
    let response = common::get_lang(app, "/api/posts/weather", "pl-PL,pl;q=0.9,en;q=0.8").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["title"], "Weather PL");
    assert_eq!(json["data"]["titleEn"], "Weather");
    assert_eq!(json["data"]["categoryLabel"], "Projekt Osobisty");

    let app = common::build_test_app(pool);
    let response = common::get_lang(app, "/api/posts/weather", "en-US").await;
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["title"], "Weather");
}

/// Detail view includes the rendered body and gallery; the list view does not.
#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_view_renders_content(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "category": "PERSONAL_PROJECT",
        "titleEn": "Rendered",
        "titlePl": "Wyrenderowany",
        "published": true,
        "contentEn": {
            "type": "doc",
            "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Hi" }] }]
        },
    });
    let response =
        common::post_json_auth(app, "/api/admin/posts", body, &common::admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = common::body_json(common::get(app, "/api/posts/rendered").await).await;
    assert_eq!(json["data"]["contentHtml"], "<p>Hi</p>");
    assert!(json["data"]["media"].is_array());

    let app = common::build_test_app(pool);
    let json = common::body_json(common::get(app, "/api/posts").await).await;
    let first = &json["data"][0];
    assert!(first.get("contentHtml").is_none());
    assert_eq!(first["excerpt"], "Hi");
}

/// A hashtag filter ignores the category filter.
#[sqlx::test(migrations = "../../db/migrations")]
async fn hashtag_filter_takes_precedence(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "category": "PROFESSIONAL_PROJECT",
        "titleEn": "Tagged",
        "titlePl": "Otagowany",
        "published": true,
        "hashtags": ["#Rust", "Axum"],
    });
    common::post_json_auth(app, "/api/admin/posts", body, &common::admin_token()).await;

    let app = common::build_test_app(pool.clone());
    common::create_post(app, "Untagged", true).await;

    let app = common::build_test_app(pool.clone());
    let json = common::body_json(
        common::get(app, "/api/posts?category=PERSONAL_PROJECT&hashtag=%23Rust").await,
    )
    .await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["slug"], "tagged");

    let app = common::build_test_app(pool.clone());
    let json = common::body_json(common::get(app, "/api/posts/hashtags").await).await;
    let tags: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert!(tags.contains(&"Rust"));
    assert!(tags.contains(&"Axum"));

    let app = common::build_test_app(pool);
    let json =
        common::body_json(common::get(app, "/api/posts?category=PERSONAL_PROJECT").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["slug"], "untagged");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_category_filter_returns_400(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/posts?category=NOPE").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paged_listing_reports_totals(pool: sqlx::PgPool) {
    for title in ["One", "Two", "Three"] {
        let app = common::build_test_app(pool.clone());
        common::create_post(app, title, true).await;
    }

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/posts/paged?page=1&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let page = &json["data"];
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["number"], 1);
    assert_eq!(page["first"], false);
    assert_eq!(page["last"], true);
    assert_eq!(page["content"][0]["slug"], "three");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paged_listing_past_the_end_is_empty(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    common::create_post(app, "Only", true).await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/posts/paged?page=9223372036854775807").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let page = &json["data"];
    assert_eq!(page["content"].as_array().unwrap().len(), 0);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["number"], i64::MAX);
    assert_eq!(page["last"], true);
}
