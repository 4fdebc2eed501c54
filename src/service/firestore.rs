//! Firestore mirror of the action log.
//!
//! Documents are created through the Firestore REST API with typed field values.
//! Authentication uses a pre-issued OAuth access token.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::sync::{Mutex, MutexGuard};

use crate::{config::FirestoreConfig, error::AppError, model::mod_action::ModActionRecord};

#[derive(Deserialize)]
struct CreatedDocument {
    name: String,
}

/// Client creating action log documents in one Firestore collection.
pub struct FirestoreClient {
    http: reqwest::Client,
    config: FirestoreConfig,
    /// Held while a row is exported so a row is never written twice.
    export_lock: Mutex<()>,
}

impl FirestoreClient {
    pub fn new(http: reqwest::Client, config: FirestoreConfig) -> Self {
        Self {
            http,
            config,
            export_lock: Mutex::new(()),
        }
    }

    /// Serializes exports going through this client.
    pub async fn lock_exports(&self) -> MutexGuard<'_, ()> {
        self.export_lock.lock().await
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.config.base_url, self.config.project_id, self.config.collection
        )
    }

    /// Adds one action log row as a new document with a generated id.
    ///
    /// # Returns
    /// - `Ok(String)` - Resource name of the created document
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-success status
    pub async fn add_document(&self, record: &ModActionRecord) -> Result<String, AppError> {
        let created: CreatedDocument = self
            .http
            .post(self.collection_url())
            .bearer_auth(&self.config.access_token)
            .json(&json!({ "fields": document_fields(record) }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(created.name)
    }
}

fn string(value: &str) -> Value {
    json!({ "stringValue": value })
}

/// Firestore typed field values of an action log row.
pub fn document_fields(record: &ModActionRecord) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("user".to_string(), string(&record.moderator));
    fields.insert("user_id".to_string(), string(&record.moderator_id));
    fields.insert("item_id".to_string(), string(&record.item_id));
    fields.insert("item_type".to_string(), string(&record.item_kind));
    fields.insert("subreddit".to_string(), string(&record.subreddit));
    fields.insert(
        "author".to_string(),
        match &record.author {
            Some(author) => string(author),
            None => json!({ "nullValue": null }),
        },
    );
    fields.insert("emoji".to_string(), string(&record.emoji));
    fields.insert(
        "approved".to_string(),
        json!({ "booleanValue": record.approved }),
    );
    fields.insert(
        "actions".to_string(),
        json!({ "arrayValue": { "values": record.actions.iter().map(|a| string(a)).collect::<Vec<_>>() } }),
    );
    fields.insert(
        "time".to_string(),
        json!({ "timestampValue": record.created_at.to_rfc3339() }),
    );
    fields
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) const COLLECTION_PATH: &str =
        "/v1/projects/lester-test/databases/(default)/documents/mod_actions";

    pub(crate) fn test_client(server: &MockServer) -> FirestoreClient {
        FirestoreClient::new(
            reqwest::Client::new(),
            FirestoreConfig {
                base_url: server.uri(),
                project_id: "lester-test".to_string(),
                access_token: "firestore-token".to_string(),
                collection: "mod_actions".to_string(),
            },
        )
    }

    pub(crate) fn record() -> ModActionRecord {
        ModActionRecord {
            id: 1,
            moderator: "Lester".to_string(),
            moderator_id: "42".to_string(),
            item_id: "t3_abc".to_string(),
            item_kind: "submission".to_string(),
            subreddit: "gtaonline".to_string(),
            author: None,
            emoji: "✔".to_string(),
            approved: true,
            actions: vec!["approved".to_string(), "locked".to_string()],
            created_at: Utc.with_ymd_and_hms(2020, 7, 20, 12, 0, 0).unwrap(),
            exported_at: None,
        }
    }

    #[test]
    fn encodes_typed_fields() {
        let fields = Value::Object(document_fields(&record()));

        assert_eq!(fields["user"]["stringValue"], "Lester");
        assert_eq!(fields["approved"]["booleanValue"], true);
        assert!(fields["author"]["nullValue"].is_null());
        assert_eq!(
            fields["actions"]["arrayValue"]["values"][1]["stringValue"],
            "locked"
        );
        assert_eq!(
            fields["time"]["timestampValue"],
            "2020-07-20T12:00:00+00:00"
        );
    }

    #[tokio::test]
    async fn creates_document_in_collection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COLLECTION_PATH))
            .and(header("authorization", "Bearer firestore-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/lester-test/databases/(default)/documents/mod_actions/abc123",
                "fields": {},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let name = client.add_document(&record()).await.unwrap();

        assert!(name.ends_with("/mod_actions/abc123"));
    }

    #[tokio::test]
    async fn rejected_write_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COLLECTION_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.add_document(&record()).await;

        assert!(matches!(result, Err(AppError::ReqwestErr(_))));
    }
}
