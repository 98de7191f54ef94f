mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn create_interest(pool: &sqlx::PgPool, title: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json_auth(
        app,
        "/api/admin/interests",
        json!({ "titleEn": title, "titlePl": format!("{title} PL") }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

async fn public_titles(pool: &sqlx::PgPool) -> Vec<String> {
    let app = common::build_test_app(pool.clone());
    let json = common::body_json(common::get(app, "/api/interests").await).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["titleEn"].as_str().unwrap().to_string())
        .collect()
}

/// New items append to the end of the list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_appends_in_order(pool: sqlx::PgPool) {
    for title in ["Chess", "Hiking", "Cooking"] {
        create_interest(&pool, title).await;
    }
    assert_eq!(public_titles(&pool).await, ["Chess", "Hiking", "Cooking"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_reorder_persists(pool: sqlx::PgPool) {
    let a = create_interest(&pool, "A").await;
    let b = create_interest(&pool, "B").await;
    let c = create_interest(&pool, "C").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        "/api/admin/interests/reorder",
        json!({ "items": [
            { "id": c, "displayOrder": 0 },
            { "id": a, "displayOrder": 1 },
            { "id": b, "displayOrder": 2 },
        ]}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["message"], "Order updated successfully");

    assert_eq!(public_titles(&pool).await, ["C", "A", "B"]);
}

/// One unknown id rejects the whole request.
#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_with_unknown_id_returns_404_and_changes_nothing(pool: sqlx::PgPool) {
    let a = create_interest(&pool, "A").await;
    let b = create_interest(&pool, "B").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        "/api/admin/interests/reorder",
        json!({ "items": [
            { "id": b, "displayOrder": 0 },
            { "id": uuid::Uuid::new_v4(), "displayOrder": 1 },
            { "id": a, "displayOrder": 2 },
        ]}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(public_titles(&pool).await, ["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_rejects_empty_and_duplicate_payloads(pool: sqlx::PgPool) {
    let a = create_interest(&pool, "A").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        "/api/admin/interests/reorder",
        json!({ "items": [] }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = common::patch_json_auth(
        app,
        "/api/admin/interests/reorder",
        json!({ "items": [
            { "id": a, "displayOrder": 0 },
            { "id": a, "displayOrder": 1 },
        ]}),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Moving renumbers the whole list and returns the new order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn move_renumbers_list(pool: sqlx::PgPool) {
    create_interest(&pool, "A").await;
    create_interest(&pool, "B").await;
    let c = create_interest(&pool, "C").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/interests/{c}/move"),
        json!({ "toIndex": 0 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    let items: &Vec<Value> = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], c.as_str());
    assert_eq!(items[0]["displayOrder"], 0);
    assert_eq!(items[2]["displayOrder"], 2);

    assert_eq!(public_titles(&pool).await, ["C", "A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn move_out_of_range_returns_400(pool: sqlx::PgPool) {
    let a = create_interest(&pool, "A").await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/interests/{a}/move"),
        json!({ "toIndex": 5 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/interests/{}/move", uuid::Uuid::new_v4()),
        json!({ "toIndex": 0 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Posts reorder through the same endpoints.
#[sqlx::test(migrations = "../../db/migrations")]
async fn post_move_changes_public_order(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool.clone());
    common::create_post(app, "First", true).await;
    let app = common::build_test_app(pool.clone());
    let second = common::create_post(app, "Second", true).await;
    let id = second["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::patch_json_auth(
        app,
        &format!("/api/admin/posts/{id}/move"),
        json!({ "toIndex": 0 }),
        &common::admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = common::body_json(common::get(app, "/api/posts").await).await;
    assert_eq!(json["data"][0]["slug"], "second");
    assert_eq!(json["data"][1]["slug"], "first");
}
