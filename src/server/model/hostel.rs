//! Hostel domain models and parameters.

use crate::model::hostel::{CreateHostelDto, HostelDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Hostel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_no: String,
    pub manager_id: i32,
    /// Maximum number of rooms the hostel may hold.
    pub room_limit: i32,
}

impl Hostel {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::hostel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            phone_no: entity.phone_no,
            manager_id: entity.manager_id,
            room_limit: entity.room_limit,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> HostelDto {
        HostelDto {
            id: self.id,
            name: self.name,
            address: self.address,
            phone_no: self.phone_no,
            manager_id: self.manager_id.max(0) as u32,
            room_limit: self.room_limit.max(0) as u32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHostelParams {
    pub name: String,
    pub address: String,
    pub phone_no: String,
    pub manager_id: i32,
    pub room_limit: i32,
}

impl From<CreateHostelDto> for CreateHostelParams {
    /// Both numeric fields are range-checked on the DTO, so they fit in `i32`.
    fn from(dto: CreateHostelDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            phone_no: dto.phone_no,
            manager_id: dto.manager_id as i32,
            room_limit: dto.room_limit as i32,
        }
    }
}
