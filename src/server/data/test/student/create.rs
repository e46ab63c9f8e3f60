use super::*;

/// Tests creating a student without a last name.
///
/// Expected: Ok with the first name used as the full name
#[tokio::test]
async fn creates_student_without_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            first_name: "Ravi".to_string(),
            last_name: None,
            address: "4 Lake View".to_string(),
            phone_no: "8765432109".to_string(),
        })
        .await?;

    assert_eq!(student.full_name(), "Ravi");
    assert_eq!(student.last_name, None);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}
