use super::*;
use entity::room::RoomStatus;
use sea_orm::{EntityTrait, PaginatorTrait};

fn booking_body(student: i32, room: i32, check_in: &str, check_out: &str) -> Value {
    json!({
        "student": student,
        "room": room,
        "check_in_date": check_in,
        "check_out_date": check_out
    })
}

/// Tests booking a vacant room.
///
/// Verifies that nights are derived from the dates and the room becomes reserved.
///
/// Expected: 201 with 4 nights and the room reserved
#[tokio::test]
async fn books_vacant_room() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::create_room(db, hostel.id).await?;
    let student = factory::student::create_student(db).await?;

    let (status, body) = post(
        &app,
        "/booking/",
        booking_body(student.id, room.id, "2021-05-19", "2021-05-23"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["no_of_nights"], 4);
    assert_eq!(body["room_status"], "reserved");

    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(db_room.status, RoomStatus::Reserved);

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = get(&app, &format!("/booking/{}/", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["student"], body["student"]);
    assert_eq!(fetched["check_out_date"], "2021-05-23");

    Ok(())
}

/// Tests booking a room that is already reserved.
///
/// Expected: 400 with no booking stored and the room unchanged
#[tokio::test]
async fn rejects_booking_of_reserved_room() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::RoomFactory::new(db, hostel.id)
        .status(RoomStatus::Reserved)
        .build()
        .await?;
    let student = factory::student::create_student(db).await?;

    let (status, body) = post(
        &app,
        "/booking/",
        booking_body(student.id, room.id, "2021-05-19", "2021-05-23"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["room"].is_array());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(db_room.status, RoomStatus::Reserved);

    Ok(())
}

/// Tests booking with check-out before check-in.
///
/// Expected: 400 and the room still vacant
#[tokio::test]
async fn rejects_inverted_dates() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::create_room(db, hostel.id).await?;
    let student = factory::student::create_student(db).await?;

    let (status, body) = post(
        &app,
        "/booking/",
        booking_body(student.id, room.id, "2021-05-23", "2021-05-19"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "check_out_date should come after check_in_date."
    );

    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?.unwrap();
    assert_eq!(db_room.status, RoomStatus::Vacant);

    Ok(())
}

/// Tests changing the check-out date of a booking.
///
/// Expected: 200 with the recomputed night count
#[tokio::test]
async fn updates_booking_dates() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/booking/{}/", booking.id),
        Some(json!({ "check_out_date": "2021-05-26" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["check_in_date"], "2021-05-19");
    assert_eq!(body["no_of_nights"], 7);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/booking/{}/", booking.id),
        Some(json!({ "check_in_date": "2021-05-30" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/booking/999/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
