//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message.
///
/// The message is posted by a non-bot user in guild channel `1` of guild `1`. When
/// `embed_url` is provided the message carries a single rich embed with that URL,
/// the way mirrored Reddit items are posted.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `content` - Message content
/// - `embed_url` - Optional URL of a single attached embed
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message_id: u64, content: &str, embed_url: Option<&str>) -> Message {
    let embeds = match embed_url {
        Some(url) => serde_json::json!([{
            "type": "rich",
            "title": "New submission",
            "url": url,
        }]),
        None => serde_json::json!([]),
    };

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": "1",
        "guild_id": "1",
        "author": {
            "id": "42",
            "username": "moderator",
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": "2026-01-01T00:00:00+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": embeds,
        "reactions": [],
        "pinned": false,
        "type": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
