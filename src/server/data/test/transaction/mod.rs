use crate::server::{
    data::transaction::TransactionRepository, model::transaction::CreateTransactionParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
