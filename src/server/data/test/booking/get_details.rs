use super::*;

/// Tests loading a booking with its student and room.
///
/// Expected: Ok(Some) with the student's full name and the room's details
#[tokio::test]
async fn includes_student_and_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::RoomFactory::new(db, hostel.id)
        .description("Twin Sharing")
        .price(1800)
        .build()
        .await?;
    let student = factory::student::StudentFactory::new(db)
        .first_name("Neha")
        .last_name(Some("Kapoor".to_string()))
        .build()
        .await?;
    let booking = factory::booking::create_booking(db, student.id, room.id).await?;

    let repo = BookingRepository::new(db);
    let details = repo.get_details(booking.id).await?.unwrap();

    assert_eq!(details.booking.id, booking.id);
    assert_eq!(details.student_name, "Neha Kapoor");
    assert_eq!(details.room_description, "Twin Sharing");
    assert_eq!(details.room_price, 1800);
    assert_eq!(details.booking.no_of_nights, 4);

    Ok(())
}

/// Tests loading a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.get_details(1).await?.is_none());
    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}
