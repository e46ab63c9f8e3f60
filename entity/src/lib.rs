//! SeaORM entities for the hostel database.

pub mod prelude;

pub mod booking;
pub mod employee;
pub mod hostel;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;
