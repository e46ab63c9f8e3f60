use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate::validate_phone_no;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateEmployeeDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(custom(function = "validate_phone_no"))]
    pub phone_no: String,
    #[validate(email, length(max = 50))]
    pub email_address: String,
    /// ID of the hostel the employee works at.
    pub hostel: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub full_name: String,
    pub address: String,
    pub phone_no: String,
    pub email_address: String,
    pub hostel_id: i32,
    /// Name of the hostel the employee works at.
    pub hostel: String,
}
