use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20210420_000003_create_student_table::Student,
    m20210420_000004_create_employee_table::Employee,
    m20210420_000005_create_booking_table::Booking,
    m20210420_000006_create_payment_table::Payment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(integer(Transaction::StudentId))
                    .col(integer(Transaction::BookingId))
                    .col(integer(Transaction::PaymentId))
                    .col(integer(Transaction::EmployeeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_student_id")
                            .from(Transaction::Table, Transaction::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_booking_id")
                            .from(Transaction::Table, Transaction::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_payment_id")
                            .from(Transaction::Table, Transaction::PaymentId)
                            .to(Payment::Table, Payment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_employee_id")
                            .from(Transaction::Table, Transaction::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    Table,
    Id,
    StudentId,
    BookingId,
    PaymentId,
    EmployeeId,
}
