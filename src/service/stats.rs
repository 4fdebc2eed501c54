//! Counters derived from the action log.

use std::collections::HashMap;

use crate::model::{mod_action::ModActionRecord, stats::ModStats};

/// Aggregates action log rows into per-moderator and per-action counts.
pub fn compute(records: &[ModActionRecord]) -> ModStats {
    let mut by_moderator: HashMap<&str, u64> = HashMap::new();
    let mut by_action: HashMap<&str, u64> = HashMap::new();
    let mut approved = 0;

    for record in records {
        *by_moderator.entry(record.moderator.as_str()).or_default() += 1;
        for action in &record.actions {
            *by_action.entry(action.as_str()).or_default() += 1;
        }
        if record.approved {
            approved += 1;
        }
    }

    let total = records.len() as u64;

    ModStats {
        total,
        approved,
        removed: total - approved,
        by_moderator: sorted(by_moderator),
        by_action: sorted(by_action),
    }
}

/// Count descending, then name ascending.
fn sorted(counts: HashMap<&str, u64>) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Plain text report, one moderator per line, as printed by the `stats` command.
pub fn report(stats: &ModStats) -> String {
    let mut lines = vec![format!(
        "{} mod actions ({} approved, {} removed)",
        stats.total, stats.approved, stats.removed
    )];
    lines.extend(
        stats
            .by_moderator
            .iter()
            .map(|(moderator, count)| format!("{} {}", moderator, count)),
    );
    lines.join("\n")
}
