use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateUserRequest;
use crate::api::dtos::responses::UserSummary;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::{Role, User};
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;
use tracing::info;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let safe_users: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();

    Ok(Json(json!({ "users": safe_users })))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    claims.require_role(Role::Admin)?;

    let (Some(username), Some(password), Some(role)) =
        (payload.username, payload.password, payload.role)
    else {
        return Err(AppError::Validation("username, password, and role are required.".to_string()));
    };

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation("username, password, and role are required.".to_string()));
    }

    let role = Role::parse(&role)
        .ok_or_else(|| AppError::Validation("Invalid role. Must be admin, viewer, or intern.".to_string()))?;

    // Friendly conflict for the common case; the unique index on
    // usernames catches concurrent duplicates that slip past this.
    if state.user_repo.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists.".to_string()));
    }

    let password_hash = state.auth_service.hash_password(&password)?;

    let user = User::new(username, password_hash, role);
    let created = state.user_repo.create(&user).await?;

    info!("Created user {} with role {}", created.id, created.role);

    Ok(Json(json!({
        "message": "User created successfully.",
        "userId": created.id
    })))
}
