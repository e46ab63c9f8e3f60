//! Employee factory for creating test employee entities.

use crate::factory::helpers::{next_id, unique_phone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    hostel_id: i32,
    first_name: String,
    last_name: Option<String>,
    address: String,
    phone_no: String,
    email_address: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Employee"`
    /// - last_name: `Some("{id}")`
    /// - phone_no: unique number starting with 7
    /// - email_address: `"employee{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection, hostel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hostel_id,
            first_name: "Employee".to_string(),
            last_name: Some(id.to_string()),
            address: format!("{} Staff Quarters", id),
            phone_no: unique_phone('7'),
            email_address: format!("employee{}@example.com", id),
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

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address: ActiveValue::Set(self.address),
            phone_no: ActiveValue::Set(self.phone_no),
            email_address: ActiveValue::Set(self.email_address),
            hostel_id: ActiveValue::Set(self.hostel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values in the given hostel.
pub async fn create_employee(
    db: &DatabaseConnection,
    hostel_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, hostel_id).build().await
}
