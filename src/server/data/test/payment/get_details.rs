use super::*;

/// Tests loading a payment with its booking and room.
///
/// Verifies that the total equals room price times nights.
///
/// Expected: Ok(Some) with total computed from the room price
#[tokio::test]
async fn computes_total_from_room_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let room = factory::room::RoomFactory::new(db, hostel.id)
        .price(2500)
        .build()
        .await?;
    let student = factory::student::create_student(db).await?;
    let booking = factory::booking::create_booking(db, student.id, room.id).await?;
    let payment = factory::payment::create_payment(db, student.id, booking.id).await?;

    let repo = PaymentRepository::new(db);
    let details = repo.get_details(payment.id).await?.unwrap();

    assert_eq!(details.booking.id, booking.id);
    assert_eq!(details.room_price, 2500);
    assert_eq!(details.booking.no_of_nights, 4);
    assert_eq!(details.total(), 10_000);
    assert_eq!(details.payment.payment_mode, PaymentMode::Cash);

    Ok(())
}
