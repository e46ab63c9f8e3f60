pub use sea_orm_migration::prelude::*;

mod m20210420_000001_create_hostel_table;
mod m20210420_000002_create_room_table;
mod m20210420_000003_create_student_table;
mod m20210420_000004_create_employee_table;
mod m20210420_000005_create_booking_table;
mod m20210420_000006_create_payment_table;
mod m20210420_000007_create_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210420_000001_create_hostel_table::Migration),
            Box::new(m20210420_000002_create_room_table::Migration),
            Box::new(m20210420_000003_create_student_table::Migration),
            Box::new(m20210420_000004_create_employee_table::Migration),
            Box::new(m20210420_000005_create_booking_table::Migration),
            Box::new(m20210420_000006_create_payment_table::Migration),
            Box::new(m20210420_000007_create_transaction_table::Migration),
        ]
    }
}
