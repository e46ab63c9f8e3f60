use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transaction::{CreateTransactionDto, TransactionDto},
    },
    server::{
        error::AppError, model::transaction::CreateTransactionParams,
        service::transaction::TransactionService, state::AppState, util::extract::ValidJson,
    },
};

pub static TRANSACTION_TAG: &str = "transaction";

#[utoipa::path(
    post,
    path = "/transaction/",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully recorded transaction", body = TransactionDto),
        (status = 400, description = "Referenced record does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&state.db)
        .create(CreateTransactionParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

#[utoipa::path(
    get,
    path = "/transaction/{id}/",
    tag = TRANSACTION_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved transaction", body = TransactionDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}
