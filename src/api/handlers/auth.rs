use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::models::auth::{LoginResponse, UserProfile};
use std::sync::Arc;
use tracing::info;

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::Validation("Username and password are required".to_string()));
    };

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Username and password are required".to_string()));
    }

    // Unknown username and wrong password must be indistinguishable.
    let user = state.user_repo.find_by_username(&username).await?
        .ok_or(AppError::InvalidCredentials)?;

    if !state.auth_service.verify_password(&password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserProfile {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    }))
}
