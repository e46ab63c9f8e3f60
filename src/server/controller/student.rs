use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto},
    },
    server::{
        error::AppError, model::student::CreateStudentParams, service::student::StudentService,
        state::AppState, util::extract::ValidJson,
    },
};

pub static STUDENT_TAG: &str = "student";

/// Create a new student.
///
/// Rejects students whose first and last name pair or phone number already exists.
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Invalid student data or duplicate student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/createStudent/",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let student = StudentService::new(&state.db)
        .create(CreateStudentParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}
