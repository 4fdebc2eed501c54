//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so handler helpers can be tested without a
//! gateway connection.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod message;

pub use member::create_test_member;
pub use message::create_test_message;
