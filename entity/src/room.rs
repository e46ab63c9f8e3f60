use sea_orm::entity::prelude::*;

/// Occupancy state of a room, stored as its lowercase name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum RoomStatus {
    #[sea_orm(string_value = "vacant")]
    Vacant,
    #[sea_orm(string_value = "reserved")]
    Reserved,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hostel_id: i32,
    pub description: String,
    pub price: i32,
    pub status: RoomStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hostel::Entity",
        from = "Column::HostelId",
        to = "super::hostel::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hostel,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::hostel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hostel.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
