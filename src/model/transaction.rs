use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateTransactionDto {
    pub student: i32,
    pub booking: i32,
    pub payment: i32,
    pub employee: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub student_id: i32,
    pub booking_id: i32,
    pub payment_id: i32,
    pub employee_id: i32,
}
