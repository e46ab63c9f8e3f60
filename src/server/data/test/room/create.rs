use super::*;

/// Tests creating a room.
///
/// Verifies that the returned room carries the owning hostel's name.
///
/// Expected: Ok with room created and hostel name resolved
#[tokio::test]
async fn creates_room_with_hostel_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::HostelFactory::new(db)
        .name("Green View Hostel")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            hostel_id: hostel.id,
            description: "King Sized Bedroom".to_string(),
            price: 3000,
            status: RoomStatus::Vacant,
        })
        .await?;

    assert_eq!(room.hostel_id, hostel.id);
    assert_eq!(room.hostel_name, "Green View Hostel");
    assert_eq!(room.description, "King Sized Bedroom");
    assert_eq!(room.price, 3000);
    assert!(room.is_vacant());

    Ok(())
}
