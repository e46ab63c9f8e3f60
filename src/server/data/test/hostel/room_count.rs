use super::*;

/// Tests counting rooms per hostel.
///
/// Verifies that rooms of other hostels are not counted.
///
/// Expected: Ok with count of the hostel's own rooms
#[tokio::test]
async fn counts_only_rooms_of_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let other = factory::hostel::create_hostel(db).await?;
    factory::room::create_room(db, hostel.id).await?;
    factory::room::create_room(db, hostel.id).await?;
    factory::room::create_room(db, other.id).await?;

    let repo = HostelRepository::new(db);

    assert_eq!(repo.room_count(hostel.id).await?, 2);
    assert_eq!(repo.room_count(other.id).await?, 1);

    Ok(())
}
