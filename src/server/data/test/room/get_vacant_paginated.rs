use super::*;

/// Tests that reserved rooms are excluded from the vacant listing.
///
/// Expected: Ok with only vacant rooms and a matching total
#[tokio::test]
async fn excludes_reserved_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let vacant = factory::room::create_room(db, hostel.id).await?;
    factory::room::RoomFactory::new(db, hostel.id)
        .status(RoomStatus::Reserved)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let page = repo.get_vacant_paginated(None, 10, 0).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, vacant.id);

    Ok(())
}

/// Tests the price ceiling filter.
///
/// Verifies that a room priced exactly at the ceiling is included.
///
/// Expected: Ok with rooms priced at or below the ceiling
#[tokio::test]
async fn filters_by_price_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let cheap = factory::room::RoomFactory::new(db, hostel.id)
        .price(1500)
        .build()
        .await?;
    let exact = factory::room::RoomFactory::new(db, hostel.id)
        .price(2500)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hostel.id)
        .price(4000)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let page = repo.get_vacant_paginated(Some(2500), 10, 0).await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![cheap.id, exact.id]);
    assert!(page.items.iter().all(|r| r.price <= 2500));

    Ok(())
}

/// Tests limit/offset windows.
///
/// Expected: Ok with the requested window and the full total
#[tokio::test]
async fn returns_requested_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let mut rooms = Vec::new();
    for _ in 0..5 {
        rooms.push(factory::room::create_room(db, hostel.id).await?);
    }

    let repo = RoomRepository::new(db);
    let page = repo.get_vacant_paginated(None, 2, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 2);
    let ids: Vec<i32> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![rooms[2].id, rooms[3].id]);

    Ok(())
}
