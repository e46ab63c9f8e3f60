//! Booking domain models, stay validation and parameters.
//!
//! A booking covers the nights between its check-in and check-out dates. Every stay is
//! validated through [`StayDates`] before it is written, both on creation and when the
//! dates of an existing booking change.

use chrono::NaiveDate;
use entity::room::RoomStatus;

use crate::{
    model::booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    server::error::booking::BookingError,
};

/// Longest stay a single booking may cover.
pub const MAX_NIGHTS: i64 = 20;

/// Number of nights between two dates, negative when `check_out` precedes `check_in`.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Check-in and check-out dates of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Validates the stay and returns its number of nights.
    ///
    /// # Returns
    /// - `Ok(nights)` - Check-out is on or after check-in and the stay is within `MAX_NIGHTS`
    /// - `Err(BookingError::InvalidDateRange)` - Check-out precedes check-in
    /// - `Err(BookingError::StayTooLong)` - The stay exceeds `MAX_NIGHTS`
    pub fn nights(&self) -> Result<i32, BookingError> {
        let nights = nights_between(self.check_in, self.check_out);

        if nights < 0 {
            return Err(BookingError::InvalidDateRange);
        }
        if nights > MAX_NIGHTS {
            return Err(BookingError::StayTooLong {
                nights,
                max: MAX_NIGHTS,
            });
        }

        Ok(nights as i32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub student_id: i32,
    pub room_id: i32,
    pub booking_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub no_of_nights: i32,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            room_id: entity.room_id,
            booking_date: entity.booking_date,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            no_of_nights: entity.no_of_nights,
        }
    }

    pub fn stay(&self) -> StayDates {
        StayDates::new(self.check_in_date, self.check_out_date)
    }
}

/// Booking enriched with the student and room it references.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub student_name: String,
    pub room_description: String,
    pub room_price: i32,
    pub room_status: RoomStatus,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            student_id: self.booking.student_id,
            student: self.student_name,
            room_id: self.booking.room_id,
            room: self.room_description,
            room_price: self.room_price,
            room_status: self.room_status.into(),
            booking_date: self.booking.booking_date,
            check_in_date: self.booking.check_in_date,
            check_out_date: self.booking.check_out_date,
            no_of_nights: self.booking.no_of_nights,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub student_id: i32,
    pub room_id: i32,
    pub stay: StayDates,
}

impl From<CreateBookingDto> for CreateBookingParams {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            student_id: dto.student,
            room_id: dto.room,
            stay: StayDates::new(dto.check_in_date, dto.check_out_date),
        }
    }
}

/// Partial change of a booking's dates; absent dates keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParams {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

impl UpdateBookingParams {
    /// Applies the change on top of the stored stay.
    pub fn apply(&self, current: StayDates) -> StayDates {
        StayDates::new(
            self.check_in_date.unwrap_or(current.check_in),
            self.check_out_date.unwrap_or(current.check_out),
        )
    }
}

impl From<UpdateBookingDto> for UpdateBookingParams {
    fn from(dto: UpdateBookingDto) -> Self {
        Self {
            check_in_date: dto.check_in_date,
            check_out_date: dto.check_out_date,
        }
    }
}
