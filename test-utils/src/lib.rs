//! Lester Test Utils
//!
//! Shared testing utilities for the lester bot. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, factories for inserting action log
//! and feed bookkeeping rows, and fixtures for Serenity objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ModAction;
//!
//! #[tokio::test]
//! async fn test_action_log() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ModAction)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
