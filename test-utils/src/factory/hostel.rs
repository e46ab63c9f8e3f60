//! Hostel factory for creating test hostel entities.

use crate::factory::helpers::{next_id, unique_phone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hostels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hostel = HostelFactory::new(&db)
///     .name("Pragati Mens Hostel")
///     .room_limit(2)
///     .build()
///     .await?;
/// ```
pub struct HostelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    phone_no: String,
    manager_id: i32,
    room_limit: i32,
}

impl<'a> HostelFactory<'a> {
    /// Creates a new HostelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hostel {id}"` where id is auto-incremented
    /// - phone_no: unique number starting with 9
    /// - manager_id: `1`
    /// - room_limit: `50`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hostel {}", id),
            address: format!("{} Hostel Road", id),
            phone_no: unique_phone('9'),
            manager_id: 1,
            room_limit: 50,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone_no(mut self, phone_no: impl Into<String>) -> Self {
        self.phone_no = phone_no.into();
        self
    }

    pub fn room_limit(mut self, room_limit: i32) -> Self {
        self.room_limit = room_limit;
        self
    }

    /// Builds and inserts the hostel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hostel::Model)` - Created hostel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hostel::Model, DbErr> {
        entity::hostel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            phone_no: ActiveValue::Set(self.phone_no),
            manager_id: ActiveValue::Set(self.manager_id),
            room_limit: ActiveValue::Set(self.room_limit),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hostel with default values.
///
/// Shorthand for `HostelFactory::new(db).build().await`.
pub async fn create_hostel(db: &DatabaseConnection) -> Result<entity::hostel::Model, DbErr> {
    HostelFactory::new(db).build().await
}
