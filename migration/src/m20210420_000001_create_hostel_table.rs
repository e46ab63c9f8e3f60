use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hostel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hostel::Id))
                    .col(string_len(Hostel::Name, 50))
                    .col(text(Hostel::Address))
                    .col(string_len(Hostel::PhoneNo, 11))
                    .col(integer(Hostel::ManagerId))
                    .col(integer(Hostel::RoomLimit))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hostel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hostel {
    Table,
    Id,
    Name,
    Address,
    PhoneNo,
    ManagerId,
    RoomLimit,
}
