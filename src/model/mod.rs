//! Request and response DTOs forming the public JSON API.
//!
//! Request DTOs carry field-level validation rules through `validator`; store-dependent
//! rules (uniqueness, vacancy, referenced rows) are enforced by the service layer.

pub mod api;
pub mod booking;
pub mod employee;
pub mod hostel;
pub mod pagination;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;
pub mod validate;
