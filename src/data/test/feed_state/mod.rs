use crate::{data::feed_state::FeedStateRepository, error::AppError};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory::feed_state::create_feed_state};

mod is_initialized;
mod mark_initialized;
