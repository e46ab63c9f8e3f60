//! HTTP request handlers.
//!
//! Each handler validates the request DTO, converts it to service parameters, calls the
//! matching service and converts the resulting domain model back to a response DTO.

pub mod booking;
pub mod employee;
pub mod hostel;
pub mod param;
pub mod payment;
pub mod room;
pub mod student;
pub mod transaction;

#[cfg(test)]
mod test;
