use reqwest::{header::USER_AGENT, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tokio::{sync::Mutex, time::Instant};

use crate::{config::RedditCredentials, error::reddit::RedditError, reddit::rate_limit::RateLimit};

const TOKEN_PATH: &str = "/api/v1/access_token";

/// Tokens are refreshed this long before Reddit says they expire.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

struct AccessToken {
    value: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Authenticated Reddit API client for a script application.
///
/// Holds a cached OAuth token and the rate limit budget of the last response. Share
/// it behind an `Arc`; all methods take `&self`.
pub struct RedditClient {
    http: reqwest::Client,
    credentials: RedditCredentials,
    token: Mutex<Option<AccessToken>>,
    rate_limit: Mutex<RateLimit>,
}

impl RedditClient {
    /// Creates a new client. No request is made until the first API call.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `credentials` - Script application credentials and endpoint base URLs
    pub fn new(http: reqwest::Client, credentials: RedditCredentials) -> Self {
        Self {
            http,
            credentials,
            token: Mutex::new(None),
            rate_limit: Mutex::new(RateLimit::default()),
        }
    }

    /// Reddit account the bot acts as.
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Returns a valid access token, requesting a new one when the cached token is
    /// missing or about to expire.
    async fn access_token(&self) -> Result<String, RedditError> {
        let mut token = self.token.lock().await;

        if let Some(cached) = token.as_ref() {
            if cached.expires_at > Instant::now() + TOKEN_REFRESH_MARGIN {
                return Ok(cached.value.clone());
            }
        }

        let response = self
            .http
            .post(format!("{}{}", self.credentials.auth_url, TOKEN_PATH))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .header(USER_AGENT, &self.credentials.user_agent)
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RedditError::Auth { status, body });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|source| RedditError::Decode {
                path: TOKEN_PATH.to_string(),
                source,
            })?;

        tracing::debug!("Obtained Reddit access token for /u/{}", self.username());

        let value = parsed.access_token.clone();
        *token = Some(AccessToken {
            value: parsed.access_token,
            expires_at: Instant::now() + Duration::from_secs(parsed.expires_in),
        });

        Ok(value)
    }

    async fn invalidate_token(&self) {
        *self.token.lock().await = None;
    }

    /// Sleeps until the rate limit window resets if the budget is spent.
    async fn wait_for_budget(&self) {
        let delay = self.rate_limit.lock().await.delay(Instant::now());

        if let Some(delay) = delay {
            tracing::warn!(
                "Reddit rate limit reached, waiting {:.1}s",
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Sends an authenticated request and returns the response body.
    ///
    /// A 401 response drops the cached token and the request is retried once with a
    /// fresh one.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        form: Option<&[(&str, &str)]>,
    ) -> Result<String, RedditError> {
        let mut retried = false;

        loop {
            self.wait_for_budget().await;
            let token = self.access_token().await?;

            let mut request = self
                .http
                .request(method.clone(), format!("{}{}", self.credentials.api_url, path))
                .bearer_auth(&token)
                .header(USER_AGENT, &self.credentials.user_agent)
                .query(query);
            if let Some(form) = form {
                request = request.form(form);
            }

            let response = request.send().await?;
            self.rate_limit
                .lock()
                .await
                .update(response.headers(), Instant::now());

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED && !retried {
                tracing::debug!("Reddit rejected access token for {}, refreshing", path);
                self.invalidate_token().await;
                retried = true;
                continue;
            }

            let body = response.text().await?;
            if !status.is_success() {
                return Err(RedditError::Status {
                    path: path.to_string(),
                    status,
                    body,
                });
            }

            return Ok(body);
        }
    }

    /// GETs a JSON resource. `raw_json=1` is always sent so text is not HTML-escaped.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RedditError> {
        let mut query = query.to_vec();
        query.push(("raw_json", "1"));

        let body = self.execute(Method::GET, path, &query, None).await?;
        decode(path, &body)
    }

    /// POSTs a form and decodes the JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, RedditError> {
        let body = self.execute(Method::POST, path, &[], Some(form)).await?;
        decode(path, &body)
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, RedditError> {
    serde_json::from_str(body).map_err(|source| RedditError::Decode {
        path: path.to_string(),
        source,
    })
}
