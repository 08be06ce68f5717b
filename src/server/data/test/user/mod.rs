use crate::server::{
    data::user::{UserRepository, UserStore},
    model::user::User,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_by_id;
mod find_all;
mod find_by_id;
mod save;
