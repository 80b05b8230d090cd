use crate::server::{data::task::TaskRepository, model::task::CreateTaskParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_by_user_id;
