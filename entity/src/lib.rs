//! SeaORM entities for the action log and feed bookkeeping tables.

pub mod prelude;

pub mod feed_state;
pub mod mod_action;
pub mod seen_item;
