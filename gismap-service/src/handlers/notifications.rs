use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Notification;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationsRequest {
    #[validate(
        required(message = "senderId, userIds, and message are required"),
        length(min = 1, message = "senderId, userIds, and message are required")
    )]
    pub sender_id: Option<String>,
    /// An empty list passes here and is rejected once ids are resolved.
    #[validate(required(message = "senderId, userIds, and message are required"))]
    pub user_ids: Option<Vec<String>>,
    #[validate(
        required(message = "senderId, userIds, and message are required"),
        length(min = 1, message = "senderId, userIds, and message are required")
    )]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendNotificationsResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub message: &'static str,
    pub notif: Notification,
}

#[tracing::instrument(skip(state, request))]
pub async fn send_notifications(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendNotificationsRequest>,
) -> Result<Json<SendNotificationsResponse>, AppError> {
    let sender_id = request.sender_id.unwrap_or_default();
    let user_ids = request.user_ids.unwrap_or_default();
    let message = request.message.unwrap_or_default();

    state
        .store
        .send_notifications(&sender_id, &user_ids, &message)
        .await?;

    Ok(Json(SendNotificationsResponse {
        message: "Notifications sent",
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Notification>> {
    Json(state.store.notifications_for(&user_id).await)
}

#[tracing::instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Result<Json<MarkReadResponse>, AppError> {
    let notif = state.store.mark_read(&notification_id).await?;

    Ok(Json(MarkReadResponse {
        message: "Notification marked as read",
        notif,
    }))
}
