use crate::server::{data::hostel::HostelRepository, model::hostel::CreateHostelParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod name_exists;
mod room_count;
