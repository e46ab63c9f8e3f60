use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto},
    },
    server::{
        error::AppError, model::payment::CreatePaymentParams, service::payment::PaymentService,
        state::AppState, util::extract::ValidJson,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Record the payment for a booking.
///
/// # Returns
/// - `201 Created` - Payment with its computed total
/// - `400 Bad Request` - Unknown booking/student, booking held by another student, or
///   booking/student already paid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/payment/",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Successfully recorded payment", body = PaymentDto),
        (status = 400, description = "Invalid payment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .create(CreatePaymentParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Get a specific payment by ID.
///
/// # Returns
/// - `200 OK` - Payment with booking details and total
/// - `404 Not Found` - Payment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/payment/{id}/",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .get_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
