//! Student factory for creating test student entities.

use crate::factory::helpers::{next_id, unique_phone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: Option<String>,
    address: String,
    phone_no: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Student"`
    /// - last_name: `Some("{id}")` so name pairs stay unique
    /// - phone_no: unique number starting with 8
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Student".to_string(),
            last_name: Some(id.to_string()),
            address: format!("{} Campus Lane", id),
            phone_no: unique_phone('8'),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub fn phone_no(mut self, phone_no: impl Into<String>) -> Self {
        self.phone_no = phone_no.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address: ActiveValue::Set(self.address),
            phone_no: ActiveValue::Set(self.phone_no),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
