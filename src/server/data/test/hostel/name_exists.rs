use super::*;

/// Tests the name and phone lookups used by the duplicate checks.
///
/// Expected: true only for values already stored
#[tokio::test]
async fn detects_existing_name_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hostel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::HostelFactory::new(db)
        .name("Sai Residency")
        .phone_no("9123456789")
        .build()
        .await?;

    let repo = HostelRepository::new(db);

    assert!(repo.name_exists(&hostel.name).await?);
    assert!(!repo.name_exists("Sai Residency Annexe").await?);
    assert!(repo.phone_exists("9123456789").await?);
    assert!(!repo.phone_exists("9123456780").await?);

    Ok(())
}
