use crate::domain::{
    models::payment::{Payment, PaymentFilter, PaymentStats},
    ports::PaymentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (id, amount, receiver, status, method, reference_id, timestamp, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id, amount, receiver, status, method, reference_id, timestamp, created_at, updated_at",
        )
            .bind(&payment.id)
            .bind(payment.amount)
            .bind(&payment.receiver)
            .bind(&payment.status)
            .bind(&payment.method)
            .bind(&payment.reference_id)
            .bind(payment.timestamp)
            .bind(payment.created_at)
            .bind(payment.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(
            "SELECT id, amount, receiver, status, method, reference_id, timestamp, created_at, updated_at FROM payments WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &PaymentFilter, page: i64, limit: i64) -> Result<Vec<Payment>, AppError> {
        let mut sql = String::from(
            "SELECT id, amount, receiver, status, method, reference_id, timestamp, created_at, updated_at FROM payments",
        );

        let mut clauses = Vec::new();
        let mut next_param = 1;
        if filter.status.is_some() {
            clauses.push(format!("status = ${next_param}"));
            next_param += 1;
        }
        if filter.method.is_some() {
            clauses.push(format!("method = ${next_param}"));
            next_param += 1;
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(&format!(" ORDER BY timestamp DESC LIMIT ${} OFFSET ${}", next_param, next_param + 1));

        let mut query = sqlx::query_as::<_, Payment>(&sql);
        if let Some(status) = &filter.status {
            query = query.bind(status);
        }
        if let Some(method) = &filter.method {
            query = query.bind(method);
        }
        query = query.bind(limit).bind((page - 1) * limit);

        query
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn stats(&self) -> Result<PaymentStats, AppError> {
        let total_payments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let total_amount: f64 = sqlx::query_scalar("SELECT CAST(COALESCE(SUM(amount), 0) AS DOUBLE PRECISION) FROM payments")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let by_status: Vec<(String, i64)> = sqlx::query_as("SELECT status, COUNT(*) FROM payments GROUP BY status")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(PaymentStats {
            total_payments,
            total_amount,
            by_status: by_status.into_iter().collect(),
        })
    }
}
