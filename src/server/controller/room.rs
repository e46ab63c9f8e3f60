use axum::{
    extract::{Query, State},
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
        pagination::PageDto,
        room::{CreateRoomDto, RoomDto},
    },
    server::{
        controller::param::PageParam, error::AppError, model::room::CreateRoomParams,
        service::room::RoomService, state::AppState, util::extract::ValidJson,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VacantRoomsParam {
    /// Only include rooms priced at or below this amount.
    pub price_limit: Option<i32>,
}

/// Create a new room in a hostel.
///
/// The room is created vacant unless the request says otherwise. Hostels cannot hold
/// more rooms than their room limit.
///
/// # Returns
/// - `201 Created` - Successfully created room
/// - `400 Bad Request` - Invalid room data, unknown hostel or hostel at its room limit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/createRoom/",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Successfully created room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// List vacant rooms.
///
/// # Returns
/// - `200 OK` - One window of vacant rooms
/// - `400 Bad Request` - No vacant room matches the request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/getVacantRooms/",
    tag = ROOM_TAG,
    params(VacantRoomsParam, PageParam),
    responses(
        (status = 200, description = "Successfully retrieved vacant rooms", body = PageDto<RoomDto>),
        (status = 400, description = "No vacant rooms found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vacant_rooms(
    State(state): State<AppState>,
    Query(filter): Query<VacantRoomsParam>,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .get_vacant(filter.price_limit, page.limit(), page.offset())
        .await?;

    Ok((StatusCode::OK, Json(rooms.into_dto(|room| room.into_dto()))))
}
