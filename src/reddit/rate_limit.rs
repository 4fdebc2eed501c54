use reqwest::header::HeaderMap;
use std::time::Duration;
use tokio::time::Instant;

const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Request budget reported by Reddit on the last response.
///
/// Reddit sends the number of requests left in the current window and the seconds
/// until the window resets. Once the budget is spent, requests wait for the reset.
#[derive(Debug, Default, Clone, Copy)]
pub struct RateLimit {
    remaining: Option<f64>,
    reset_at: Option<Instant>,
}

impl RateLimit {
    /// Records the budget from response headers. Missing or malformed headers
    /// leave the previous values untouched.
    pub fn update(&mut self, headers: &HeaderMap, now: Instant) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<f64>().ok())
        };

        if let Some(remaining) = header(REMAINING_HEADER) {
            self.remaining = Some(remaining);
        }
        if let Some(reset) = header(RESET_HEADER) {
            self.reset_at = Some(now + Duration::from_secs_f64(reset.max(0.0)));
        }
    }

    /// How long to wait before the next request may be sent.
    pub fn delay(&self, now: Instant) -> Option<Duration> {
        match (self.remaining, self.reset_at) {
            (Some(remaining), Some(reset_at)) if remaining < 1.0 && reset_at > now => {
                Some(reset_at - now)
            }
            _ => None,
        }
    }
}
