//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod booking;
pub mod employee;
pub mod hostel;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;

#[cfg(test)]
mod test;
