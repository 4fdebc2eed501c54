//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity models to
//! domain models at the boundary.

pub mod feed_state;
pub mod mod_action;
pub mod seen_item;

#[cfg(test)]
mod test;
