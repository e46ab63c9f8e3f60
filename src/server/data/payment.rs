use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    model::{
        booking::Booking,
        payment::{CreatePaymentParams, Payment, PaymentDetails},
    },
    util::name::full_name,
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new payment stamped with the current time
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            booking_id: ActiveValue::Set(params.booking_id),
            payment_mode: ActiveValue::Set(params.payment_mode),
            payment_datetime: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    /// Gets a payment by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Checks whether the booking has already been paid for
    pub async fn exists_for_booking(&self, booking_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the student has already made a payment
    pub async fn exists_for_student(&self, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a payment by ID with its booking, the booked room and the student's name
    pub async fn get_details(&self, id: i32) -> Result<Option<PaymentDetails>, DbErr> {
        let Some((payment, booking)) = entity::prelude::Payment::find_by_id(id)
            .find_also_related(entity::prelude::Booking)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let booking = booking.ok_or(DbErr::RecordNotFound(format!(
            "Booking with id {} not found for payment {}",
            payment.booking_id, payment.id
        )))?;

        let room = entity::prelude::Room::find_by_id(booking.room_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found for booking {}",
                booking.room_id, booking.id
            )))?;

        let student = entity::prelude::Student::find_by_id(payment.student_id)
            .one(self.db)
            .await?;

        Ok(Some(PaymentDetails {
            student_name: student
                .map(|s| full_name(&s.first_name, s.last_name.as_deref()))
                .unwrap_or_default(),
            booking: Booking::from_entity(booking),
            room_description: room.description,
            room_price: room.price,
            payment: Payment::from_entity(payment),
        }))
    }
}
