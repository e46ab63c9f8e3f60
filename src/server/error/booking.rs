use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Check-out falls before check-in.
    #[error("check_out_date should come after check_in_date.")]
    InvalidDateRange,

    /// The stay exceeds the maximum number of nights a booking may cover.
    #[error("A booking cannot exceed {max} nights, requested {nights}")]
    StayTooLong { nights: i64, max: i64 },

    /// The room already carries a reservation.
    #[error("Room is not vacant")]
    RoomNotVacant { room_id: i32 },
}

/// Converts booking errors into 400 Bad Request responses.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let field = match self {
            Self::InvalidDateRange | Self::StayTooLong { .. } => "check_out_date",
            Self::RoomNotVacant { .. } => "room",
        };
        super::bad_request(self.to_string(), Some(field))
    }
}
