//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness checks, room capacity, the booking and payment rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod booking;
pub mod employee;
pub mod hostel;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;
