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
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::FirstName, 50))
                    .col(string_len_null(Employee::LastName, 50))
                    .col(text(Employee::Address))
                    .col(string_len(Employee::PhoneNo, 11))
                    .col(string_len(Employee::EmailAddress, 50))
                    .col(integer(Employee::HostelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_hostel_id")
                            .from(Employee::Table, Employee::HostelId)
                            .to(Hostel::Table, Hostel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    PhoneNo,
    EmailAddress,
    HostelId,
}
