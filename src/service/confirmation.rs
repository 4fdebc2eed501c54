//! Confirmation before overriding another moderator.
//!
//! Removing an item a human moderator approved, or approving an item a human
//! moderator removed, first asks the reacting moderator to confirm in a DM.

use std::time::Duration;

use crate::model::{reaction::ReactionConfig, reddit::RedditItem};

pub const CONFIRM_EMOJI: &str = "✔";
pub const CANCEL_EMOJI: &str = "❌";

/// How long the moderator has to answer the prompt.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(2 * 60);

pub const TIMEOUT_MESSAGE: &str =
    "❌ That took too long! You can restart the process by reacting to the item again.";

const AUTOMODERATOR: &str = "automoderator";

/// Earlier decision a reaction would override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    /// Removing an item approved by this moderator.
    Approved(String),
    /// Approving an item removed by this moderator.
    Removed(String),
}

/// Whether applying `reaction` overrides a human moderator's decision.
pub fn required_override(item: &RedditItem, reaction: &ReactionConfig) -> Option<Override> {
    let is_human = |name: &&String| !name.eq_ignore_ascii_case(AUTOMODERATOR);

    if !reaction.approve {
        if let Some(approver) = item.approved_by.as_ref().filter(is_human) {
            return Some(Override::Approved(approver.clone()));
        }
    } else if item.removed_by_category.as_deref() == Some("moderator") {
        if let Some(remover) = item.removed_by.as_ref().filter(is_human) {
            return Some(Override::Removed(remover.clone()));
        }
    }

    None
}

/// Text of the DM asking the moderator to confirm.
pub fn prompt_text(item: &RedditItem, reason: &Override) -> String {
    let question = match reason {
        Override::Approved(by) => format!(
            "was already approved by /u/{}, are you sure you want to remove it?",
            by
        ),
        Override::Removed(by) => format!(
            "was already removed by /u/{}, are you sure you want to approve it?",
            by
        ),
    };

    format!(
        "The {} by /u/{} {}\n\n{}",
        item.kind,
        item.author_name(),
        question,
        item.permalink
    )
}

/// Whether the moderator's answer confirms the action.
pub fn is_confirmed(emoji: &str) -> bool {
    emoji.trim_end_matches('\u{FE0F}') == CONFIRM_EMOJI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        reaction::default_reactions,
        reddit::{tests::submission, ItemSource},
    };

    fn approve() -> ReactionConfig {
        default_reactions().remove(0)
    }

    fn remove() -> ReactionConfig {
        default_reactions().remove(1)
    }

    #[test]
    fn removing_human_approval_needs_confirmation() {
        let mut item = submission("abc", ItemSource::Lookup);
        item.approved_by = Some("SomeMod".to_string());

        assert_eq!(
            required_override(&item, &remove()),
            Some(Override::Approved("SomeMod".to_string()))
        );
        assert_eq!(required_override(&item, &approve()), None);
    }

    #[test]
    fn automoderator_decisions_are_not_confirmed() {
        let mut item = submission("abc", ItemSource::Lookup);
        item.approved_by = Some("AutoModerator".to_string());
        assert_eq!(required_override(&item, &remove()), None);

        let mut item = submission("abc", ItemSource::Lookup);
        item.removed_by = Some("AutoModerator".to_string());
        item.removed_by_category = Some("moderator".to_string());
        assert_eq!(required_override(&item, &approve()), None);
    }

    #[test]
    fn approving_moderator_removal_needs_confirmation() {
        let mut item = submission("abc", ItemSource::Lookup);
        item.removed_by = Some("SomeMod".to_string());
        item.removed_by_category = Some("moderator".to_string());

        let reason = required_override(&item, &approve()).unwrap();
        assert_eq!(reason, Override::Removed("SomeMod".to_string()));
        assert!(prompt_text(&item, &reason).starts_with(
            "The submission by /u/PlayerOne was already removed by /u/SomeMod, are you sure you want to approve it?"
        ));
        assert!(prompt_text(&item, &reason).ends_with(&item.permalink));
    }

    #[test]
    fn spam_filter_removals_are_not_confirmed() {
        let mut item = submission("abc", ItemSource::Lookup);
        item.removed_by = Some("true".to_string());
        item.removed_by_category = Some("reddit".to_string());

        assert_eq!(required_override(&item, &approve()), None);
    }

    #[test]
    fn only_check_mark_confirms() {
        assert!(is_confirmed("✔"));
        assert!(is_confirmed("✔\u{FE0F}"));
        assert!(!is_confirmed("❌"));
    }
}
