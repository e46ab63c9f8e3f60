use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, payment::PaymentRepository, student::StudentRepository},
    error::{payment::PaymentError, AppError},
    model::payment::{CreatePaymentParams, PaymentDetails},
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the payment for a booking
    ///
    /// The paying student must hold the booking, and neither the booking nor the
    /// student may have paid before.
    ///
    /// # Returns
    /// - `Ok(PaymentDetails)` - The stored payment with its computed total
    /// - `Err(AppError::BadRequest)` - Booking or student does not exist
    /// - `Err(AppError::PaymentErr)` - Ownership or one-payment rule violated
    pub async fn create(&self, params: CreatePaymentParams) -> Result<PaymentDetails, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(params.booking_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Booking {} does not exist", params.booking_id))
            })?;

        if StudentRepository::new(self.db)
            .find_by_id(params.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Student {} does not exist",
                params.student_id
            )));
        }

        if booking.student_id != params.student_id {
            return Err(PaymentError::NotBookingHolder {
                booking_id: booking.id,
                student_id: params.student_id,
            }
            .into());
        }

        let repo = PaymentRepository::new(self.db);

        if repo.exists_for_booking(booking.id).await? {
            return Err(PaymentError::AlreadyPaidForBooking.into());
        }
        if repo.exists_for_student(params.student_id).await? {
            return Err(PaymentError::StudentAlreadyPaid.into());
        }

        let payment = repo.create(params).await?;

        repo.get_details(payment.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found after creation".to_string()))
    }

    /// Gets a payment by ID with its booking details and total
    pub async fn get_details(&self, id: i32) -> Result<Option<PaymentDetails>, AppError> {
        Ok(PaymentRepository::new(self.db).get_details(id).await?)
    }
}
