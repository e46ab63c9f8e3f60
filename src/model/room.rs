use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatusDto {
    #[default]
    Vacant,
    Reserved,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateRoomDto {
    /// ID of the hostel the room belongs to.
    pub hostel: i32,
    #[validate(length(min = 1, max = 50))]
    pub description: String,
    #[validate(range(min = 1))]
    pub price: i32,
    #[serde(default)]
    pub status: RoomStatusDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub hostel_id: i32,
    pub hostel_name: String,
    pub description: String,
    pub price: i32,
    pub status: RoomStatusDto,
}
