//! Room domain models and parameters.
//!
//! Also provides the conversions between the stored room status and its API
//! representation.

use entity::room::RoomStatus;

use crate::model::room::{CreateRoomDto, RoomDto, RoomStatusDto};

/// Room together with the name of the hostel it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hostel_id: i32,
    pub hostel_name: String,
    pub description: String,
    pub price: i32,
    pub status: RoomStatus,
}

impl Room {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The room entity from the database
    /// - `hostel` - The owning hostel, if it was loaded alongside the room
    pub fn from_entity(entity: entity::room::Model, hostel: Option<entity::hostel::Model>) -> Self {
        Self {
            id: entity.id,
            hostel_id: entity.hostel_id,
            hostel_name: hostel.map(|h| h.name).unwrap_or_default(),
            description: entity.description,
            price: entity.price,
            status: entity.status,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.status == RoomStatus::Vacant
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            hostel_id: self.hostel_id,
            hostel_name: self.hostel_name,
            description: self.description,
            price: self.price,
            status: self.status.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub hostel_id: i32,
    pub description: String,
    pub price: i32,
    pub status: RoomStatus,
}

impl From<CreateRoomDto> for CreateRoomParams {
    fn from(dto: CreateRoomDto) -> Self {
        Self {
            hostel_id: dto.hostel,
            description: dto.description,
            price: dto.price,
            status: dto.status.into(),
        }
    }
}

impl From<RoomStatus> for RoomStatusDto {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Vacant => Self::Vacant,
            RoomStatus::Reserved => Self::Reserved,
        }
    }
}

impl From<RoomStatusDto> for RoomStatus {
    fn from(status: RoomStatusDto) -> Self {
        match status {
            RoomStatusDto::Vacant => Self::Vacant,
            RoomStatusDto::Reserved => Self::Reserved,
        }
    }
}
