use super::*;

/// Tests creating a new hostel.
///
/// Verifies that the repository persists every field and returns the stored hostel.
///
/// Expected: Ok with hostel created
#[tokio::test]
async fn creates_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hostel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HostelRepository::new(db);
    let hostel = repo
        .create(CreateHostelParams {
            name: "Pragati Mens Hostel".to_string(),
            address: "12 College Road".to_string(),
            phone_no: "9876543210".to_string(),
            manager_id: 42,
            room_limit: 10,
        })
        .await?;

    assert_eq!(hostel.name, "Pragati Mens Hostel");
    assert_eq!(hostel.manager_id, 42);
    assert_eq!(hostel.room_limit, 10);

    let db_hostel = entity::prelude::Hostel::find_by_id(hostel.id).one(db).await?;
    assert!(db_hostel.is_some());
    assert_eq!(db_hostel.unwrap().phone_no, "9876543210");

    Ok(())
}

/// Tests fetching a hostel that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hostel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HostelRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
