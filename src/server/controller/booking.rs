use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        model::booking::{CreateBookingParams, UpdateBookingParams},
        service::booking::BookingService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a room.
///
/// Reserves the room and stores the booking together. The number of nights is derived
/// from the dates and the booking date is set to today.
///
/// # Returns
/// - `201 Created` - Successfully created booking
/// - `400 Bad Request` - Invalid dates, stay too long, room not vacant, or unknown
///   student/room
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/booking/",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get a specific booking by ID.
///
/// # Returns
/// - `200 OK` - Booking with student name and room details
/// - `404 Not Found` - Booking not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/booking/{id}/",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Update the dates of a booking.
///
/// Dates missing from the body keep their stored value. The stay is validated again and
/// the number of nights recomputed.
///
/// # Returns
/// - `200 OK` - Updated booking
/// - `400 Bad Request` - Invalid dates or stay too long
/// - `404 Not Found` - Booking not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/booking/{id}/",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking dates", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .update(id, UpdateBookingParams::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
