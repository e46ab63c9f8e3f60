use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        employee::{CreateEmployeeDto, EmployeeDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PageParam,
        error::AppError,
        model::employee::{CreateEmployeeParams, EmployeeFilter, EmployeeOrdering},
        service::employee::EmployeeService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListParam {
    /// Exact name of the hostel the employees work at.
    pub hostel: Option<String>,
    /// Text searched for in the last name.
    pub search: Option<String>,
    /// `first_name` or `-first_name`.
    pub ordering: Option<String>,
}

impl From<EmployeeListParam> for EmployeeFilter {
    fn from(param: EmployeeListParam) -> Self {
        Self {
            hostel: param.hostel,
            search: param.search,
            ordering: param.ordering.as_deref().and_then(EmployeeOrdering::parse),
        }
    }
}

/// Create a new employee.
///
/// # Returns
/// - `201 Created` - Successfully created employee
/// - `400 Bad Request` - Invalid employee data, unknown hostel or duplicate employee
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/createEmployee/",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = EmployeeService::new(&state.db)
        .create(CreateEmployeeParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(employee.into_dto())))
}

/// Get a specific employee by ID.
///
/// # Returns
/// - `200 OK` - Employee with full name and hostel name
/// - `404 Not Found` - Employee not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/getEmployee/{id}/",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let employee = EmployeeService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// List employees.
///
/// Supports filtering by hostel name, searching the last name and ordering by first
/// name. Unknown ordering values are ignored.
///
/// # Returns
/// - `200 OK` - One window of employees
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/listEmployee/",
    tag = EMPLOYEE_TAG,
    params(EmployeeListParam, PageParam),
    responses(
        (status = 200, description = "Successfully retrieved employees", body = PageDto<EmployeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(filter): Query<EmployeeListParam>,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let employees = EmployeeService::new(&state.db)
        .get_paginated(EmployeeFilter::from(filter), page.limit(), page.offset())
        .await?;

    Ok((
        StatusCode::OK,
        Json(employees.into_dto(|employee| employee.into_dto())),
    ))
}
