use crate::server::{
    data::{car::CarRepository, user::UserRepository},
    model::user::UpsertUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod car;
mod user;
