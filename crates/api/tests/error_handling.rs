mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use folio_api::error::AppError;
use folio_api::storage::StorageError;
use folio_core::error::CoreError;
use validator::Validate;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, common::body_json(response).await)
}

#[tokio::test]
async fn not_found_uses_envelope() {
    let id = uuid::Uuid::new_v4();
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "Post",
        id,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert!(json["data"].is_null());
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], format!("Post with id {id} not found"));
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) = render(AppError::InternalError("db password leaked".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_errors_map_by_kind() {
    let (status, _) = render(AppError::Storage(StorageError::TooLarge(10))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let (status, _) = render(AppError::Storage(StorageError::TypeNotAllowed(
        "text/html".into(),
    )))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_errors_list_fields() {
    let errors = folio_core::contact::ContactMessage {
        name: "Jan".into(),
        email: "jan@example.com".into(),
        subject: " ".into(),
        message: "Hello".into(),
    }
    .validate()
    .unwrap_err();

    let (status, json) = render(AppError::Validation(errors)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"]["subject"], "Subject is required");
}
