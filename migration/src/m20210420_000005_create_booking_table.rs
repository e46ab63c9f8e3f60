use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20210420_000002_create_room_table::Room, m20210420_000003_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::StudentId))
                    .col(integer(Booking::RoomId))
                    .col(date(Booking::BookingDate))
                    .col(date(Booking::CheckInDate))
                    .col(date(Booking::CheckOutDate))
                    .col(integer(Booking::NoOfNights))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_student_id")
                            .from(Booking::Table, Booking::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    StudentId,
    RoomId,
    BookingDate,
    CheckInDate,
    CheckOutDate,
    NoOfNights,
}
