use super::*;

/// Tests replacing the stay of a booking.
///
/// Expected: Ok with new dates and night count stored
#[tokio::test]
async fn stores_new_dates_and_nights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let new_stay = StayDates::new(
        NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 6, 8).unwrap(),
    );

    let repo = BookingRepository::new(db);
    let updated = repo.update_dates(booking.id, new_stay, 7).await?;

    assert_eq!(updated.check_in_date, new_stay.check_in);
    assert_eq!(updated.check_out_date, new_stay.check_out);
    assert_eq!(updated.no_of_nights, 7);
    assert_eq!(updated.booking_date, booking.booking_date);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.update_dates(42, stay(), 4).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
