//! Employee domain models, parameters and listing filters.

use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto},
    server::util::name::full_name,
};

/// Employee together with the name of the hostel they work at.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: String,
    pub phone_no: String,
    pub email_address: String,
    pub hostel_id: i32,
    pub hostel_name: String,
}

impl Employee {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The employee entity from the database
    /// - `hostel` - The hostel the employee works at, if loaded
    pub fn from_entity(
        entity: entity::employee::Model,
        hostel: Option<entity::hostel::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            phone_no: entity.phone_no,
            email_address: entity.email_address,
            hostel_id: entity.hostel_id,
            hostel_name: hostel.map(|h| h.name).unwrap_or_default(),
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, self.last_name.as_deref())
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            full_name: self.full_name(),
            address: self.address,
            phone_no: self.phone_no,
            email_address: self.email_address,
            hostel_id: self.hostel_id,
            hostel: self.hostel_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: String,
    pub phone_no: String,
    pub email_address: String,
    pub hostel_id: i32,
}

impl From<CreateEmployeeDto> for CreateEmployeeParams {
    fn from(dto: CreateEmployeeDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name.filter(|name| !name.is_empty()),
            address: dto.address,
            phone_no: dto.phone_no,
            email_address: dto.email_address,
            hostel_id: dto.hostel,
        }
    }
}

/// Sort order accepted by the employee listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeOrdering {
    FirstNameAsc,
    FirstNameDesc,
}

impl EmployeeOrdering {
    /// Parses an `ordering` query value.
    ///
    /// Unknown fields yield `None` and the listing falls back to id order.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "first_name" => Some(Self::FirstNameAsc),
            "-first_name" => Some(Self::FirstNameDesc),
            _ => None,
        }
    }
}

/// Optional filters for the employee listing.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Exact name of the hostel the employees work at.
    pub hostel: Option<String>,
    /// Substring matched against the last name.
    pub search: Option<String>,
    pub ordering: Option<EmployeeOrdering>,
}
