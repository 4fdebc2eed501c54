pub use super::feed_state::Entity as FeedState;
pub use super::mod_action::Entity as ModAction;
pub use super::seen_item::Entity as SeenItem;
