use entity::room::RoomStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::Page,
    room::{CreateRoomParams, Room},
};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new room and returns it with the owning hostel's name
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            hostel_id: ActiveValue::Set(params.hostel_id),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(room.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found after creation",
                room.id
            )))
    }

    /// Gets a room by ID with the owning hostel's name
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let result = entity::prelude::Room::find_by_id(id)
            .find_also_related(entity::prelude::Hostel)
            .one(self.db)
            .await?;

        Ok(result.map(|(room, hostel)| Room::from_entity(room, hostel)))
    }

    /// Gets one window of vacant rooms ordered by ID
    ///
    /// # Arguments
    /// - `price_limit` - When set, only rooms priced at or below it are returned
    /// - `limit` - Maximum number of rooms in the window
    /// - `offset` - Number of matching rooms skipped before the window
    ///
    /// # Returns
    /// - `Ok(Page<Room>)` - The window along with the total number of matching rooms
    pub async fn get_vacant_paginated(
        &self,
        price_limit: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<Page<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(RoomStatus::Vacant));
        if let Some(price_limit) = price_limit {
            query = query.filter(entity::room::Column::Price.lte(price_limit));
        }

        let total = query.clone().count(self.db).await?;

        let rooms = query
            .find_also_related(entity::prelude::Hostel)
            .order_by_asc(entity::room::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(Page {
            items: rooms
                .into_iter()
                .map(|(room, hostel)| Room::from_entity(room, hostel))
                .collect(),
            total,
            limit,
            offset,
        })
    }
}
