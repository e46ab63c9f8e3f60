use super::*;

/// Tests matching on the first and last name pair.
///
/// Expected: true only when both names match
#[tokio::test]
async fn matches_full_name_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .first_name("Anita")
        .last_name(Some("Desai".to_string()))
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.name_pair_exists("Anita", Some("Desai")).await?);
    assert!(!repo.name_pair_exists("Anita", Some("Rao")).await?);
    assert!(!repo.name_pair_exists("Anita", None).await?);

    Ok(())
}

/// Tests that an absent last name only matches students without one.
///
/// Expected: true for the stored first name with no last name
#[tokio::test]
async fn matches_missing_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .first_name("Kiran")
        .last_name(None)
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.name_pair_exists("Kiran", None).await?);
    assert!(!repo.name_pair_exists("Kiran", Some("Kumar")).await?);
    assert!(repo.phone_exists(&student.phone_no).await?);

    Ok(())
}
