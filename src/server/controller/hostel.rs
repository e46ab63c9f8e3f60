use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        hostel::{CreateHostelDto, HostelDto},
        student::HostelStudentsDto,
    },
    server::{
        error::AppError, model::hostel::CreateHostelParams, service::hostel::HostelService,
        state::AppState, util::extract::ValidJson,
    },
};

/// Tag for grouping hostel endpoints in OpenAPI documentation
pub static HOSTEL_TAG: &str = "hostel";

/// Create a new hostel.
///
/// Rejects hostels whose name or phone number is already in use.
///
/// # Returns
/// - `201 Created` - Successfully created hostel
/// - `400 Bad Request` - Invalid hostel data or duplicate name/phone number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/createHostel/",
    tag = HOSTEL_TAG,
    request_body = CreateHostelDto,
    responses(
        (status = 201, description = "Successfully created hostel", body = HostelDto),
        (status = 400, description = "Invalid hostel data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hostel(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateHostelDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let hostel = HostelService::new(&state.db)
        .create(CreateHostelParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(hostel.into_dto())))
}

/// Get a specific hostel by ID.
///
/// # Returns
/// - `200 OK` - Hostel details
/// - `404 Not Found` - Hostel not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/getHostelDetails/{id}/",
    tag = HOSTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hostel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hostel", body = HostelDto),
        (status = 404, description = "Hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hostel_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hostel = HostelService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hostel not found".to_string()))?;

    Ok((StatusCode::OK, Json(hostel.into_dto())))
}

/// Get the names of the students who booked a room in a hostel.
///
/// A student is listed once per booking. A hostel without bookings yields an empty
/// list and a message saying so.
///
/// # Returns
/// - `200 OK` - Student names with a summary message
/// - `404 Not Found` - Hostel not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/getStudents/{hostel_id}/",
    tag = HOSTEL_TAG,
    params(
        ("hostel_id" = i32, Path, description = "Hostel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student names", body = HostelStudentsDto),
        (status = 404, description = "Hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hostel_students(
    State(state): State<AppState>,
    Path(hostel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let students = HostelService::new(&state.db)
        .get_students(hostel_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                "Hostel does not exist. Please pass a correct hostel id".to_string(),
            )
        })?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}
