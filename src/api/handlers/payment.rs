use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreatePaymentRequest, PaymentListQuery};
use crate::api::dtos::responses::PaymentListResponse;
use crate::domain::models::payment::{Payment, PaymentFilter, PaymentStatus};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(amount), Some(receiver)) = (payload.amount, payload.receiver) else {
        return Err(AppError::Validation("amount and receiver are required".to_string()));
    };

    if receiver.is_empty() {
        return Err(AppError::Validation("amount and receiver are required".to_string()));
    }

    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::Validation("amount must be a positive number".to_string()));
    }

    let status = match payload.status.as_deref() {
        Some(value) => PaymentStatus::parse(value)
            .ok_or_else(|| AppError::Validation("Invalid status value".to_string()))?,
        None => PaymentStatus::Pending,
    };

    let payment = Payment::new(
        amount,
        receiver,
        status,
        payload.method.unwrap_or_else(|| "card".to_string()),
        payload.reference_id,
        payload.timestamp.unwrap_or_else(Utc::now),
    );

    let created = state.payment_repo.create(&payment).await?;

    info!("Payment created: {}", created.id);

    Ok(Json(serde_json::json!({
        "message": "Payment created",
        "id": created.id
    })))
}

pub async fn list_payments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);

    let filter = PaymentFilter {
        status: params.status,
        method: params.method,
    };

    let payments = state.payment_repo.list(&filter, page, limit).await?;

    Ok(Json(PaymentListResponse { payments, page, limit }))
}

pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let payment = state.payment_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment))
}

pub async fn payment_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.payment_repo.stats().await?;

    Ok(Json(stats))
}
