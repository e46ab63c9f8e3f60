use super::*;

/// Tests creating an employee.
///
/// Verifies that the returned employee carries the hostel's name and that the
/// name and phone lookups see the new row.
///
/// Expected: Ok with employee created
#[tokio::test]
async fn creates_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::HostelFactory::new(db)
        .name("Sunrise Hostel")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(CreateEmployeeParams {
            first_name: "Meena".to_string(),
            last_name: Some("Iyer".to_string()),
            address: "7 Warden Lane".to_string(),
            phone_no: "7012345678".to_string(),
            email_address: "meena@example.com".to_string(),
            hostel_id: hostel.id,
        })
        .await?;

    assert_eq!(employee.full_name(), "Meena Iyer");
    assert_eq!(employee.hostel_name, "Sunrise Hostel");

    assert!(repo.name_pair_exists("Meena", Some("Iyer")).await?);
    assert!(repo.phone_exists("7012345678").await?);
    assert!(!repo.phone_exists("7012345679").await?);

    let fetched = repo.find_by_id(employee.id).await?;
    assert_eq!(fetched, Some(employee));

    Ok(())
}
