mod feed_state;
mod mod_action;
mod seen_item;
