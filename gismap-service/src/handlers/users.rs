use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub user: User,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let name = request.name.unwrap_or_default();
    let (user, outcome) = state.store.create_or_get_user(&name).await?;

    Ok(Json(CreateUserResponse {
        message: outcome.message(),
        user,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list_users().await)
}
