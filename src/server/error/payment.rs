use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment was already done for this booking")]
    AlreadyPaidForBooking,

    #[error("Student has already made a payment")]
    StudentAlreadyPaid,

    /// The paying student does not hold the booking.
    #[error("Booking {booking_id} does not belong to student {student_id}")]
    NotBookingHolder { booking_id: i32, student_id: i32 },
}

/// Converts payment errors into 400 Bad Request responses.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let field = match self {
            Self::AlreadyPaidForBooking => "booking",
            Self::StudentAlreadyPaid | Self::NotBookingHolder { .. } => "student",
        };
        super::bad_request(self.to_string(), Some(field))
    }
}
