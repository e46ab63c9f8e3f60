use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParams, StayDates},
};
use chrono::NaiveDate;
use entity::room::RoomStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_reserving_room;
mod get_details;
mod update_dates;

fn stay() -> StayDates {
    StayDates::new(
        NaiveDate::from_ymd_opt(2021, 5, 19).unwrap(),
        NaiveDate::from_ymd_opt(2021, 5, 23).unwrap(),
    )
}
