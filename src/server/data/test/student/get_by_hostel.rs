use super::*;

/// Tests resolving the students who booked rooms of a hostel.
///
/// Verifies that bookings in other hostels are ignored and that a student is
/// listed once per booking.
///
/// Expected: Ok with one student per booking in the hostel
#[tokio::test]
async fn returns_students_with_bookings_in_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let other_hostel = factory::hostel::create_hostel(db).await?;
    let room_a = factory::room::create_room(db, hostel.id).await?;
    let room_b = factory::room::create_room(db, hostel.id).await?;
    let other_room = factory::room::create_room(db, other_hostel.id).await?;

    let first = factory::student::create_student(db).await?;
    let second = factory::student::create_student(db).await?;
    let outsider = factory::student::create_student(db).await?;

    factory::booking::create_booking(db, first.id, room_a.id).await?;
    factory::booking::create_booking(db, second.id, room_b.id).await?;
    factory::booking::create_booking(db, first.id, room_b.id).await?;
    factory::booking::create_booking(db, outsider.id, other_room.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_by_hostel(hostel.id).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, first.id]);

    Ok(())
}

/// Tests a hostel whose rooms have no bookings.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    factory::room::create_room(db, hostel.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_by_hostel(hostel.id).await?;

    assert!(students.is_empty());

    Ok(())
}
