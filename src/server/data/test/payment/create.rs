use super::*;

/// Tests recording a payment.
///
/// Verifies that the booking and student lookups see the new payment.
///
/// Expected: Ok with payment created
#[tokio::test]
async fn creates_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    assert!(!repo.exists_for_booking(booking.id).await?);
    assert!(!repo.exists_for_student(student.id).await?);

    let payment = repo
        .create(CreatePaymentParams {
            student_id: student.id,
            booking_id: booking.id,
            payment_mode: PaymentMode::Online,
        })
        .await?;

    assert_eq!(payment.payment_mode, PaymentMode::Online);
    assert!(repo.exists_for_booking(booking.id).await?);
    assert!(repo.exists_for_student(student.id).await?);
    assert!(repo.find_by_id(payment.id).await?.is_some());

    Ok(())
}
