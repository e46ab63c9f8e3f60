use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, employee::EmployeeRepository, payment::PaymentRepository,
        student::StudentRepository, transaction::TransactionRepository,
    },
    error::AppError,
    model::transaction::{CreateTransactionParams, Transaction},
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a transaction once every referenced row is known to exist
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, AppError> {
        if StudentRepository::new(self.db)
            .find_by_id(params.student_id)
            .await?
            .is_none()
        {
            return Err(missing("Student", params.student_id));
        }
        if BookingRepository::new(self.db)
            .find_by_id(params.booking_id)
            .await?
            .is_none()
        {
            return Err(missing("Booking", params.booking_id));
        }
        if PaymentRepository::new(self.db)
            .find_by_id(params.payment_id)
            .await?
            .is_none()
        {
            return Err(missing("Payment", params.payment_id));
        }
        if EmployeeRepository::new(self.db)
            .find_by_id(params.employee_id)
            .await?
            .is_none()
        {
            return Err(missing("Employee", params.employee_id));
        }

        Ok(TransactionRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Transaction>, AppError> {
        Ok(TransactionRepository::new(self.db).find_by_id(id).await?)
    }
}

fn missing(kind: &str, id: i32) -> AppError {
    AppError::BadRequest(format!("{} {} does not exist", kind, id))
}
