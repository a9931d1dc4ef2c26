use serde::{Deserialize, Serialize};
use crate::domain::models::user::Role;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    /// Role gate: exact match only, no hierarchy.
    pub fn require_role(&self, required: Role) -> Result<(), AppError> {
        if self.role == required.as_str() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Insufficient privilege".to_string()))
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub role: String,
}
