use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParams};
use entity::payment::PaymentMode;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_details;
