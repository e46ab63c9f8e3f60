use super::*;

/// Tests recording a transaction and reading it back.
///
/// Expected: Ok with the stored references returned by `find_by_id`
#[tokio::test]
async fn creates_and_finds_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, _, student, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let payment = factory::payment::create_payment(db, student.id, booking.id).await?;
    let employee = factory::employee::create_employee(db, hostel.id).await?;

    let repo = TransactionRepository::new(db);
    let transaction = repo
        .create(CreateTransactionParams {
            student_id: student.id,
            booking_id: booking.id,
            payment_id: payment.id,
            employee_id: employee.id,
        })
        .await?;

    let fetched = repo.find_by_id(transaction.id).await?;
    assert_eq!(fetched, Some(transaction.clone()));
    assert_eq!(transaction.employee_id, employee.id);
    assert!(repo.find_by_id(transaction.id + 1).await?.is_none());

    Ok(())
}
