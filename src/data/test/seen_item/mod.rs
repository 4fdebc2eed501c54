use crate::{data::seen_item::SeenItemRepository, error::AppError};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::seen_item::{create_seen_item, create_seen_item_at},
};

mod filter_unseen;
mod insert_many;
mod prune_older_than;
mod touch;

fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| key.to_string()).collect()
}
