use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate::validate_phone_no;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateHostelDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(custom(function = "validate_phone_no"))]
    pub phone_no: String,
    #[validate(range(max = 99999))]
    pub manager_id: u32,
    #[validate(range(min = 1, max = 100))]
    pub room_limit: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HostelDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_no: String,
    pub manager_id: u32,
    pub room_limit: u32,
}
