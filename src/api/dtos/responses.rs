use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::models::payment::Payment;
use crate::domain::models::user::User;

/// A user as exposed over the API. The password hash never leaves the
/// domain layer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
    pub page: i64,
    pub limit: i64,
}
