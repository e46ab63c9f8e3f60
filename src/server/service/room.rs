use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hostel::HostelRepository, room::RoomRepository},
    error::{room::RoomError, AppError},
    model::{
        page::Page,
        room::{CreateRoomParams, Room},
    },
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room in a hostel that still has capacity
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room with its hostel name
    /// - `Err(AppError::BadRequest)` - The hostel does not exist
    /// - `Err(AppError::RoomErr(HostelFull))` - The hostel holds `room_limit` rooms already
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let hostel_repo = HostelRepository::new(self.db);

        let hostel = hostel_repo
            .find_by_id(params.hostel_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Hostel {} does not exist", params.hostel_id))
            })?;

        let room_count = hostel_repo.room_count(hostel.id).await?;
        if room_count >= hostel.room_limit.max(0) as u64 {
            return Err(RoomError::HostelFull {
                hostel_id: hostel.id,
                room_limit: hostel.room_limit,
            }
            .into());
        }

        let room = RoomRepository::new(self.db).create(params).await?;

        Ok(room)
    }

    /// Gets one window of vacant rooms, optionally capped by price
    ///
    /// An empty result is reported as an error rather than an empty page.
    pub async fn get_vacant(
        &self,
        price_limit: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<Page<Room>, AppError> {
        let page = RoomRepository::new(self.db)
            .get_vacant_paginated(price_limit, limit, offset)
            .await?;

        if page.total == 0 {
            let err = match price_limit {
                Some(price_limit) => RoomError::NoneVacantWithinPrice { price_limit },
                None => RoomError::NoneVacant,
            };
            return Err(err.into());
        }

        Ok(page)
    }
}
