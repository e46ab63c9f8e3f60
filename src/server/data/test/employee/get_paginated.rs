use super::*;

/// Tests filtering employees by hostel name.
///
/// Expected: Ok with only employees of the named hostel
#[tokio::test]
async fn filters_by_hostel_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::HostelFactory::new(db)
        .name("North Wing")
        .build()
        .await?;
    let other = factory::hostel::create_hostel(db).await?;
    let employee = factory::employee::create_employee(db, hostel.id).await?;
    factory::employee::create_employee(db, other.id).await?;

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(
            EmployeeFilter {
                hostel: Some("North Wing".to_string()),
                ..Default::default()
            },
            10,
            0,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, employee.id);
    assert_eq!(page.items[0].hostel_name, "North Wing");

    Ok(())
}

/// Tests searching on the last name.
///
/// Expected: Ok with employees whose last name contains the search term
#[tokio::test]
async fn searches_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    let sharma = factory::employee::EmployeeFactory::new(db, hostel.id)
        .last_name(Some("Sharma".to_string()))
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, hostel.id)
        .last_name(Some("Verma".to_string()))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(
            EmployeeFilter {
                search: Some("harm".to_string()),
                ..Default::default()
            },
            10,
            0,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, sharma.id);

    Ok(())
}

/// Tests that wildcard characters in the search term match only themselves.
///
/// Expected: Ok with `%` matching nothing and `_` matching only a literal underscore
#[tokio::test]
async fn searches_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    factory::employee::EmployeeFactory::new(db, hostel.id)
        .last_name(Some("Sharma".to_string()))
        .build()
        .await?;
    let underscored = factory::employee::EmployeeFactory::new(db, hostel.id)
        .last_name(Some("De_Souza".to_string()))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let search = |term: &str| EmployeeFilter {
        search: Some(term.to_string()),
        ..Default::default()
    };

    let page = repo.get_paginated(search("%"), 10, 0).await?;
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    let page = repo.get_paginated(search("_"), 10, 0).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, underscored.id);

    Ok(())
}

/// Tests descending first name ordering with a window.
///
/// Expected: Ok with the window taken from the ordered list
#[tokio::test]
async fn orders_by_first_name_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::create_hostel(db).await?;
    for name in ["Arun", "Chitra", "Bala"] {
        factory::employee::EmployeeFactory::new(db, hostel.id)
            .first_name(name)
            .build()
            .await?;
    }

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(
            EmployeeFilter {
                ordering: Some(EmployeeOrdering::FirstNameDesc),
                ..Default::default()
            },
            2,
            0,
        )
        .await?;

    assert_eq!(page.total, 3);
    let names: Vec<&str> = page.items.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(names, vec!["Chitra", "Bala"]);

    Ok(())
}
