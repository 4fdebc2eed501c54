//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild Member with the given roles.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `nick` - Optional guild nickname
/// - `role_ids` - Role IDs assigned to the member
/// - `bot` - Whether the underlying user is a bot account
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user_id: u64, nick: Option<&str>, role_ids: &[u64], bot: bool) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": "1",
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "avatar": null,
            "bot": bot,
        },
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2026-01-01T00:00:00+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
