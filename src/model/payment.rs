use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentModeDto {
    Cash,
    Online,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePaymentDto {
    /// ID of the paying student.
    pub student: i32,
    /// ID of the booking being paid for.
    pub booking: i32,
    pub payment_mode: PaymentModeDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    /// Full name of the paying student.
    pub student: String,
    pub booking_id: i32,
    pub booking_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Description of the booked room.
    pub room: String,
    pub room_price: i32,
    pub no_of_nights: i32,
    pub payment_mode: PaymentModeDto,
    pub payment_datetime: DateTime<Utc>,
    /// Room price multiplied by the number of nights.
    pub total_payments: i64,
}
