use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::ContactMessage;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::json::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// Validate a contact-form submission and forward it to the site owner.
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactMessage>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    state.mailer.send_contact(&input).await?;

    tracing::info!(from = %input.email, "Contact message accepted");
    Ok(Json(ApiResponse::message("Message sent successfully")))
}
