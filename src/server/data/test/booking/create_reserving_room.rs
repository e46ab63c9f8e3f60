use super::*;

/// Tests booking a vacant room.
///
/// Verifies that the booking is stored with the given nights and that the room
/// is switched to reserved.
///
/// Expected: Ok(Some) with booking created and room reserved
#[tokio::test]
async fn reserves_vacant_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::create_room(db, hostel.id).await?;
    let student = factory::student::create_student(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_reserving_room(
            CreateBookingParams {
                student_id: student.id,
                room_id: room.id,
                stay: stay(),
            },
            4,
        )
        .await?;

    assert!(booking.is_some());
    let booking = booking.unwrap();
    assert_eq!(booking.no_of_nights, 4);
    assert_eq!(booking.room_id, room.id);

    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(db_room.status, RoomStatus::Reserved);

    Ok(())
}

/// Tests booking a room that is already reserved.
///
/// Verifies that nothing is written when the room is not vacant.
///
/// Expected: Ok(None) with no booking stored
#[tokio::test]
async fn leaves_reserved_room_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::RoomFactory::new(db, hostel.id)
        .status(RoomStatus::Reserved)
        .build()
        .await?;
    let student = factory::student::create_student(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_reserving_room(
            CreateBookingParams {
                student_id: student.id,
                room_id: room.id,
                stay: stay(),
            },
            4,
        )
        .await?;

    assert!(booking.is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(db_room.status, RoomStatus::Reserved);

    Ok(())
}

/// Tests that a second booking of the same room is refused.
///
/// Expected: first Ok(Some), second Ok(None)
#[tokio::test]
async fn refuses_second_booking_of_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::create_room(db, hostel.id).await?;
    let first = factory::student::create_student(db).await?;
    let second = factory::student::create_student(db).await?;

    let repo = BookingRepository::new(db);
    let params = |student_id| CreateBookingParams {
        student_id,
        room_id: room.id,
        stay: stay(),
    };

    assert!(repo.create_reserving_room(params(first.id), 4).await?.is_some());
    assert!(repo.create_reserving_room(params(second.id), 4).await?.is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);

    Ok(())
}
