use crate::domain::models::payment::{Payment, PaymentFilter, PaymentStats};
use crate::domain::models::user::User;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError>;
    async fn list(&self, filter: &PaymentFilter, page: i64, limit: i64) -> Result<Vec<Payment>, AppError>;
    async fn stats(&self) -> Result<PaymentStats, AppError>;
}
