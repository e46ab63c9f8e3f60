use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::transaction::{CreateTransactionParams, Transaction};

pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new transaction record
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, DbErr> {
        let transaction = entity::transaction::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            booking_id: ActiveValue::Set(params.booking_id),
            payment_id: ActiveValue::Set(params.payment_id),
            employee_id: ActiveValue::Set(params.employee_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Transaction::from_entity(transaction))
    }

    /// Gets a transaction by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, DbErr> {
        let transaction = entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(transaction.map(Transaction::from_entity))
    }
}
