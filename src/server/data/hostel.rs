use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::hostel::{CreateHostelParams, Hostel};

pub struct HostelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hostel
    pub async fn create(&self, params: CreateHostelParams) -> Result<Hostel, DbErr> {
        let hostel = entity::hostel::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            phone_no: ActiveValue::Set(params.phone_no),
            manager_id: ActiveValue::Set(params.manager_id),
            room_limit: ActiveValue::Set(params.room_limit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hostel::from_entity(hostel))
    }

    /// Gets a hostel by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hostel>, DbErr> {
        let hostel = entity::prelude::Hostel::find_by_id(id).one(self.db).await?;

        Ok(hostel.map(Hostel::from_entity))
    }

    /// Checks whether any hostel already uses the given name
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Hostel::find()
            .filter(entity::hostel::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any hostel already uses the given phone number
    pub async fn phone_exists(&self, phone_no: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Hostel::find()
            .filter(entity::hostel::Column::PhoneNo.eq(phone_no))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the rooms belonging to a hostel
    pub async fn room_count(&self, hostel_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HostelId.eq(hostel_id))
            .count(self.db)
            .await
    }
}
