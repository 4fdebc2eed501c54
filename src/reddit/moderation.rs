//! Moderation endpoints reactions map to.

use serde_json::Value;

use crate::{
    error::reddit::RedditError,
    model::reaction::BanConfig,
    reddit::RedditClient,
};

impl RedditClient {
    /// Approves a submission or comment.
    pub async fn approve(&self, fullname: &str) -> Result<(), RedditError> {
        let _: Value = self.post("/api/approve", &[("id", fullname)]).await?;
        Ok(())
    }

    /// Removes a submission or comment, optionally training the spam filter.
    pub async fn remove(&self, fullname: &str, spam: bool) -> Result<(), RedditError> {
        let spam = if spam { "true" } else { "false" };
        let _: Value = self
            .post("/api/remove", &[("id", fullname), ("spam", spam)])
            .await?;
        Ok(())
    }

    pub async fn lock(&self, fullname: &str) -> Result<(), RedditError> {
        let _: Value = self.post("/api/lock", &[("id", fullname)]).await?;
        Ok(())
    }

    /// Posts a reply on a submission, comment or message.
    ///
    /// # Returns
    /// - `Ok(())` - Reply posted
    /// - `Err(RedditError::Api)` - Reddit refused the reply, e.g. the thread is archived
    /// - `Err(RedditError)` - Request failed
    pub async fn reply(&self, fullname: &str, text: &str) -> Result<(), RedditError> {
        const PATH: &str = "/api/comment";

        let response: Value = self
            .post(
                PATH,
                &[("thing_id", fullname), ("text", text), ("api_type", "json")],
            )
            .await?;

        check_api_errors(PATH, &response)
    }

    pub async fn mark_read(&self, fullname: &str) -> Result<(), RedditError> {
        let _: Value = self.post("/api/read_message", &[("id", fullname)]).await?;
        Ok(())
    }

    /// Bans a user from a subreddit.
    ///
    /// # Arguments
    /// - `subreddit` - Subreddit to ban from
    /// - `username` - Account to ban
    /// - `ban` - Duration in days (permanent when absent), user message and mod note
    pub async fn ban(
        &self,
        subreddit: &str,
        username: &str,
        ban: &BanConfig,
    ) -> Result<(), RedditError> {
        let path = format!("/r/{}/api/friend", subreddit);
        let duration = ban.duration.map(|days| days.to_string());

        let mut form = vec![
            ("name", username),
            ("type", "banned"),
            ("api_type", "json"),
        ];
        if let Some(duration) = &duration {
            form.push(("duration", duration.as_str()));
        }
        if let Some(message) = &ban.message {
            form.push(("ban_message", message.as_str()));
        }
        if let Some(reason) = &ban.reason {
            form.push(("ban_reason", reason.as_str()));
        }

        let response: Value = self.post(&path, &form).await?;

        check_api_errors(&path, &response)
    }
}

/// Reads `json.errors` from an `api_type=json` response.
///
/// Each error is an array of `[code, message, field]`.
fn check_api_errors(path: &str, response: &Value) -> Result<(), RedditError> {
    let errors: Vec<String> = response
        .pointer("/json/errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|error| match error.as_array() {
                    Some(parts) => parts
                        .iter()
                        .take(2)
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(": "),
                    None => error.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RedditError::Api {
            path: path.to_string(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::client::tests::{mount_token, test_client};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn removes_as_spam() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/remove"))
            .and(body_string_contains("id=t3_abc"))
            .and(body_string_contains("spam=true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.remove("t3_abc", true).await.unwrap();
    }

    #[tokio::test]
    async fn reply_surfaces_api_errors() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/comment"))
            .and(body_string_contains("api_type=json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "json": {"errors": [["TOO_OLD", "that's a piece of history now", "parent"]]}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.reply("t3_abc", "Removed, rule 3").await.unwrap_err();

        match err {
            RedditError::Api { path, errors } => {
                assert_eq!(path, "/api/comment");
                assert_eq!(errors, vec!["TOO_OLD: that's a piece of history now"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn bans_with_duration_and_message() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("POST"))
            .and(path("/r/gtaonline/api/friend"))
            .and(body_string_contains("name=PlayerOne"))
            .and(body_string_contains("type=banned"))
            .and(body_string_contains("duration=3"))
            .and(body_string_contains("ban_reason=spam"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"json": {"errors": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .ban(
                "gtaonline",
                "PlayerOne",
                &BanConfig {
                    duration: Some(3),
                    message: None,
                    reason: Some("spam".to_string()),
                },
            )
            .await
            .unwrap();
    }

    #[test]
    fn empty_or_missing_errors_are_ok() {
        assert!(check_api_errors("/api/comment", &json!({})).is_ok());
        assert!(check_api_errors("/api/comment", &json!({"json": {"errors": []}})).is_ok());
    }
}
