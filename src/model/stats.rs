//! Counters derived from the action log.

/// Aggregated moderation statistics.
///
/// `by_moderator` and `by_action` are sorted by count descending, then name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModStats {
    pub total: u64,
    pub approved: u64,
    pub removed: u64,
    pub by_moderator: Vec<(String, u64)>,
    pub by_action: Vec<(String, u64)>,
}
