use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// The hostel already holds as many rooms as its room limit allows.
    #[error("Hostel {hostel_id} has reached its limit of {room_limit} rooms")]
    HostelFull { hostel_id: i32, room_limit: i32 },

    /// No room is vacant at all.
    #[error("Sorry, all rooms are occupied. Please try later..")]
    NoneVacant,

    /// No vacant room is priced at or below the requested ceiling.
    #[error("No vacant rooms found priced at or below {price_limit}")]
    NoneVacantWithinPrice { price_limit: i32 },
}

/// Converts room errors into 400 Bad Request responses.
impl IntoResponse for RoomError {
    fn into_response(self) -> Response {
        super::bad_request(self.to_string(), None)
    }
}
