//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique test values and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a valid, unique 10 digit phone number starting with `prefix`.
///
/// `prefix` must be one of 6-9 for the number to pass phone validation.
pub fn unique_phone(prefix: char) -> String {
    format!("{}{:09}", prefix, next_id() % 1_000_000_000)
}

/// Creates a booking together with the hostel, room and student it references.
///
/// The room is left vacant; the factory inserts the booking row directly without
/// running the booking workflow.
///
/// # Returns
/// - `Ok((hostel, room, student, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hostel::Model,
        entity::room::Model,
        entity::student::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let hostel = crate::factory::hostel::create_hostel(db).await?;
    let room = crate::factory::room::create_room(db, hostel.id).await?;
    let student = crate::factory::student::create_student(db).await?;
    let booking = crate::factory::booking::create_booking(db, student.id, room.id).await?;

    Ok((hostel, room, student, booking))
}
