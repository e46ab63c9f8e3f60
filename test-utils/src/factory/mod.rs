//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hostel = factory::hostel::create_hostel(&db).await?;
//!     let room = factory::room::create_room(&db, hostel.id).await?;
//!
//!     // Create with all dependencies
//!     let (hostel, room, student, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let room = factory::room::RoomFactory::new(&db, hostel.id)
//!     .price(1500)
//!     .status(RoomStatus::Reserved)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod employee;
pub mod helpers;
pub mod hostel;
pub mod payment;
pub mod room;
pub mod student;

pub use booking::create_booking;
pub use employee::create_employee;
pub use hostel::create_hostel;
pub use payment::create_payment;
pub use room::create_room;
pub use student::create_student;
