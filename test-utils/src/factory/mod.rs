//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let action = factory::create_mod_action(&db).await?;
//!     let removal = factory::mod_action::ModActionFactory::new(&db)
//!         .moderator("Lester")
//!         .approved(false)
//!         .actions(&["removed"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `feed_state` - Mark feeds as initialized
//! - `mod_action` - Create action log rows
//! - `seen_item` - Create feed bookkeeping rows
//! - `helpers` - Shared id generation

pub mod feed_state;
pub mod helpers;
pub mod mod_action;
pub mod seen_item;

pub use feed_state::create_feed_state;
pub use mod_action::create_mod_action;
pub use seen_item::create_seen_item;
