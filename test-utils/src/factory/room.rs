//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use entity::room::RoomStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, hostel.id)
///     .price(1500)
///     .status(RoomStatus::Reserved)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hostel_id: i32,
    description: String,
    price: i32,
    status: RoomStatus,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Room {id}"`
    /// - price: `3000`
    /// - status: `RoomStatus::Vacant`
    pub fn new(db: &'a DatabaseConnection, hostel_id: i32) -> Self {
        Self {
            db,
            hostel_id,
            description: format!("Room {}", next_id()),
            price: 3000,
            status: RoomStatus::Vacant,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            hostel_id: ActiveValue::Set(self.hostel_id),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vacant room with default values in the given hostel.
pub async fn create_room(
    db: &DatabaseConnection,
    hostel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hostel_id).build().await
}
