use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Reddit API client.
#[derive(Error, Debug)]
pub enum RedditError {
    /// Transport-level failure talking to Reddit.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The OAuth token endpoint rejected the configured credentials.
    #[error("Reddit authentication failed with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    /// An API endpoint returned a non-success status.
    #[error("Reddit API request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// A response body did not match the expected JSON shape.
    #[error("Failed to decode Reddit response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reddit accepted the request but reported errors in the `json.errors` array.
    #[error("Reddit API reported errors for {path}: {}", errors.join("; "))]
    Api { path: String, errors: Vec<String> },
}
