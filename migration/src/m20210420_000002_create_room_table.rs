use sea_orm_migration::{prelude::*, schema::*};

use super::m20210420_000001_create_hostel_table::Hostel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HostelId))
                    .col(string_len(Room::Description, 50))
                    .col(integer(Room::Price))
                    .col(string_len(Room::Status, 8).default("vacant"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hostel_id")
                            .from(Room::Table, Room::HostelId)
                            .to(Hostel::Table, Hostel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_status_price")
                    .table(Room::Table)
                    .col(Room::Status)
                    .col(Room::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HostelId,
    Description,
    Price,
    Status,
}
