//! Booking factory for creating test booking entities.
//!
//! The factory inserts booking rows directly and does not touch the referenced room's
//! status. Use the booking service when a test needs the reservation side effect.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    room_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in_date: `2021-05-19`
    /// - check_out_date: `2021-05-23`
    pub fn new(db: &'a DatabaseConnection, student_id: i32, room_id: i32) -> Self {
        Self {
            db,
            student_id,
            room_id,
            check_in_date: NaiveDate::from_ymd_opt(2021, 5, 19).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2021, 5, 23).unwrap(),
        }
    }

    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// `no_of_nights` is derived from the configured dates.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let nights = (self.check_out_date - self.check_in_date).num_days() as i32;

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            room_id: ActiveValue::Set(self.room_id),
            booking_date: ActiveValue::Set(Utc::now().date_naive()),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            no_of_nights: ActiveValue::Set(nights),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a four night booking for the given student and room.
pub async fn create_booking(
    db: &DatabaseConnection,
    student_id: i32,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, student_id, room_id).build().await
}
