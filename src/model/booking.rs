use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::room::RoomStatusDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateBookingDto {
    /// ID of the booking student.
    pub student: i32,
    /// ID of the booked room.
    pub room: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateBookingDto {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub student_id: i32,
    /// Full name of the booking student.
    pub student: String,
    pub room_id: i32,
    /// Description of the booked room.
    pub room: String,
    pub room_price: i32,
    pub room_status: RoomStatusDto,
    pub booking_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub no_of_nights: i32,
}
