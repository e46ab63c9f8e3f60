//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod booking;
pub mod employee;
pub mod hostel;
pub mod page;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;
