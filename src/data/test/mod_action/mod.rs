use crate::{
    data::mod_action::ModActionRepository, error::AppError,
    model::mod_action::CreateModActionParams,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::mod_action::ModActionFactory};

mod create;
mod get_all;
mod get_unexported;
mod mark_exported;
