use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate::validate_phone_no;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(custom(function = "validate_phone_no"))]
    pub phone_no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub full_name: String,
    pub address: String,
    pub phone_no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HostelStudentsDto {
    pub student_full_names_list: Vec<String>,
    pub message: String,
}
