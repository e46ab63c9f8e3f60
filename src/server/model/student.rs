//! Student domain models and parameters.

use crate::{
    model::student::{CreateStudentDto, HostelStudentsDto, StudentDto},
    server::util::name::full_name,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: String,
    pub phone_no: String,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            phone_no: entity.phone_no,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, self.last_name.as_deref())
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            full_name: self.full_name(),
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            phone_no: self.phone_no,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: String,
    pub phone_no: String,
}

impl From<CreateStudentDto> for CreateStudentParams {
    /// An empty last name is stored as absent.
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name.filter(|name| !name.is_empty()),
            address: dto.address,
            phone_no: dto.phone_no,
        }
    }
}

/// Full names of the students holding a booking in one hostel, one entry per booking.
#[derive(Debug, Clone, PartialEq)]
pub struct HostelStudents {
    pub names: Vec<String>,
}

impl HostelStudents {
    pub fn into_dto(self) -> HostelStudentsDto {
        let message = if self.names.is_empty() {
            "There are no students in this hostel".to_string()
        } else {
            format!("got {} students", self.names.len())
        };

        HostelStudentsDto {
            student_full_names_list: self.names,
            message,
        }
    }
}
