//! Payment factory for creating test payment entities.

use chrono::Utc;
use entity::payment::PaymentMode;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    booking_id: i32,
    payment_mode: PaymentMode,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory paying in cash.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, booking_id: i32) -> Self {
        Self {
            db,
            student_id,
            booking_id,
            payment_mode: PaymentMode::Cash,
        }
    }

    pub fn payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }

    /// Builds and inserts the payment entity into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            booking_id: ActiveValue::Set(self.booking_id),
            payment_mode: ActiveValue::Set(self.payment_mode),
            payment_datetime: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cash payment for the given student and booking.
pub async fn create_payment(
    db: &DatabaseConnection,
    student_id: i32,
    booking_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, student_id, booking_id).build().await
}
