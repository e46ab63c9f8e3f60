use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository, student::StudentRepository},
    error::{booking::BookingError, AppError},
    model::booking::{BookingDetails, CreateBookingParams, UpdateBookingParams},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a vacant room for a student
    ///
    /// Validates the stay, checks the student and room exist, then reserves the room
    /// and stores the booking in one transaction. Nothing is written when any check
    /// fails.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The booking with the now reserved room
    /// - `Err(AppError::BookingErr)` - Invalid stay or the room is not vacant
    /// - `Err(AppError::BadRequest)` - Student or room does not exist
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingDetails, AppError> {
        let nights = params.stay.nights()?;

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

        let room = RoomRepository::new(self.db)
            .find_by_id(params.room_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Room {} does not exist", params.room_id))
            })?;

        if !room.is_vacant() {
            return Err(BookingError::RoomNotVacant { room_id: room.id }.into());
        }

        let repo = BookingRepository::new(self.db);

        let booking = repo
            .create_reserving_room(params, nights)
            .await?
            .ok_or(BookingError::RoomNotVacant { room_id: room.id })?;

        tracing::info!(
            "Booked room {} for student {} ({} nights)",
            booking.room_id,
            booking.student_id,
            booking.no_of_nights
        );

        repo.get_details(booking.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found after creation".to_string()))
    }

    /// Gets a booking by ID with its student and room details
    pub async fn get_details(&self, id: i32) -> Result<Option<BookingDetails>, AppError> {
        Ok(BookingRepository::new(self.db).get_details(id).await?)
    }

    /// Changes the dates of a booking
    ///
    /// The merged stay is validated like a new booking and the night count recomputed.
    /// Room vacancy is not checked again. Returns None if the booking doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBookingParams,
    ) -> Result<Option<BookingDetails>, AppError> {
        let repo = BookingRepository::new(self.db);

        let Some(booking) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let stay = params.apply(booking.stay());
        let nights = stay.nights()?;

        repo.update_dates(id, stay, nights).await?;

        Ok(repo.get_details(id).await?)
    }
}
