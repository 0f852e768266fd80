use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    email::{self, EmailRequestBody},
    handlers::error::ApiError,
    registry::ComponentKey,
    state::AppState,
    types::FooterContent,
};

/// Footer record as JSON. No built-in fallback here: a missing or unusable
/// artifact is a 404 so clients can tell it apart from real content.
pub async fn footer(State(state): State<AppState>) -> Result<Json<FooterContent>, ApiError> {
    let store = state.store.clone();
    let footer = tokio::task::spawn_blocking(move || {
        store.resolve_component_content::<FooterContent>(ComponentKey::Footer.as_str())
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "footer lookup task failed");
        ApiError::Internal("Failed to load footer content".to_string())
    })?;

    footer
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Footer content not found".to_string()))
}

/// Contact form submission.
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequestBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected contact payload");
        ApiError::BadRequest("Invalid request body".to_string())
    })?;
    let request = body.validate().map_err(email::NotifyError::from)?;

    email::notify(state.mailer.as_deref(), &state.config, &request).await?;

    Ok(Json(json!({ "success": true })))
}
