//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod booking;
pub mod config;
pub mod duplicate;
pub mod payment;
pub mod room;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        booking::BookingError, config::ConfigError, duplicate::DuplicateError,
        payment::PaymentError, room::RoomError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle their own
/// response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Field-level validation failure on a request DTO.
    ///
    /// Results in 400 Bad Request listing the messages for each offending field.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// A uniqueness rule rejected the write.
    #[error(transparent)]
    DuplicateErr(#[from] DuplicateError),

    /// The booking workflow rejected the request.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Room creation or the vacant room listing rejected the request.
    #[error(transparent)]
    RoomErr(#[from] RoomError),

    /// Payment recording rejected the request.
    #[error(transparent)]
    PaymentErr(#[from] PaymentError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation, domain rule and `BadRequest` errors
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For database, configuration and IO errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(errors) => validation_response(&errors),
            Self::DuplicateErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::RoomErr(err) => err.into_response(),
            Self::PaymentErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a 400 response carrying every field message reported by `validator`.
fn validation_response(errors: &validator::ValidationErrors) -> Response {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("failed `{}` validation", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: "Invalid request data".to_string(),
            fields: Some(fields),
        }),
    )
        .into_response()
}

/// Builds the 400 response shared by the domain error enums.
pub(crate) fn bad_request(message: String, field: Option<&str>) -> Response {
    let body = match field {
        Some(field) => ErrorDto::with_field(message, field),
        None => ErrorDto::new(message),
    };

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
