use chrono::Utc;
use entity::room::RoomStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::{
    model::booking::{Booking, BookingDetails, CreateBookingParams, StayDates},
    util::name::full_name,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reserves the room and inserts the booking in one transaction
    ///
    /// The room is switched to reserved only if it is still vacant, so the vacancy check
    /// and the reservation cannot be split by a concurrent booking. The booking date is
    /// set to the current date.
    ///
    /// # Arguments
    /// - `params` - Student, room and stay of the booking
    /// - `nights` - Number of nights of the validated stay
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Room reserved and booking persisted
    /// - `Ok(None)` - The room was not vacant; nothing was written
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn create_reserving_room(
        &self,
        params: CreateBookingParams,
        nights: i32,
    ) -> Result<Option<Booking>, DbErr> {
        let txn = self.db.begin().await?;

        let reserved = entity::prelude::Room::update_many()
            .set(entity::room::ActiveModel {
                status: ActiveValue::Set(RoomStatus::Reserved),
                ..Default::default()
            })
            .filter(entity::room::Column::Id.eq(params.room_id))
            .filter(entity::room::Column::Status.eq(RoomStatus::Vacant))
            .exec(&txn)
            .await?;

        if reserved.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let booking = entity::booking::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            room_id: ActiveValue::Set(params.room_id),
            booking_date: ActiveValue::Set(Utc::now().date_naive()),
            check_in_date: ActiveValue::Set(params.stay.check_in),
            check_out_date: ActiveValue::Set(params.stay.check_out),
            no_of_nights: ActiveValue::Set(nights),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Booking::from_entity(booking)))
    }

    /// Gets a booking by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Gets a booking by ID with the student's full name and the room's details
    pub async fn get_details(&self, id: i32) -> Result<Option<BookingDetails>, DbErr> {
        let Some((booking, student)) = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Student)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let room = entity::prelude::Room::find_by_id(booking.room_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found for booking {}",
                booking.room_id, booking.id
            )))?;

        Ok(Some(BookingDetails {
            student_name: student
                .map(|s| full_name(&s.first_name, s.last_name.as_deref()))
                .unwrap_or_default(),
            room_description: room.description,
            room_price: room.price,
            room_status: room.status,
            booking: Booking::from_entity(booking),
        }))
    }

    /// Replaces the stay of a booking and stores its recomputed night count
    pub async fn update_dates(
        &self,
        id: i32,
        stay: StayDates,
        nights: i32,
    ) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found",
                id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.check_in_date = ActiveValue::Set(stay.check_in);
        active_model.check_out_date = ActiveValue::Set(stay.check_out);
        active_model.no_of_nights = ActiveValue::Set(nights);

        let booking = active_model.update(self.db).await?;

        Ok(Booking::from_entity(booking))
    }
}
