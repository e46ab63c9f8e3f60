use crate::server::{data::student::StudentRepository, model::student::CreateStudentParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_hostel;
mod name_pair_exists;
