//! Finding Reddit item references in free text.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::reddit::{ItemKind, ItemRef};

/// Post link, optionally followed by a slug and a comment id.
static COMMENTS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)reddit\.com/r/\w+/comments/(\w+)(?:/[^/\s]*/(\w+))?").expect("valid regex")
});

static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)redd\.it/(\w+)").expect("valid regex"));

static MESSAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)reddit\.com/message/messages/(\w+)").expect("valid regex")
});

impl ItemRef {
    /// Finds the first Reddit submission, comment or message link in `text`.
    ///
    /// # Returns
    /// - `Some(ItemRef)` - Reference of the earliest link in the text
    /// - `None` - The text contains no recognised Reddit link
    pub fn find_in(text: &str) -> Option<ItemRef> {
        let comments = COMMENTS_LINK.captures(text).map(|caps| {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let item = match caps.get(2) {
                Some(comment) => ItemRef::new(ItemKind::Comment, comment.as_str()),
                None => ItemRef::new(ItemKind::Submission, &caps[1]),
            };
            (start, item)
        });
        let short = SHORT_LINK.captures(text).map(|caps| {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            (start, ItemRef::new(ItemKind::Submission, &caps[1]))
        });
        let message = MESSAGE_LINK.captures(text).map(|caps| {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            (start, ItemRef::new(ItemKind::Message, &caps[1]))
        });

        [comments, short, message]
            .into_iter()
            .flatten()
            .min_by_key(|(start, _)| *start)
            .map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_submission_link() {
        let item = ItemRef::find_in(
            "look at https://www.reddit.com/r/gtaonline/comments/hsq1xk/heist_crew_wanted/ pls",
        );

        assert_eq!(item, Some(ItemRef::new(ItemKind::Submission, "hsq1xk")));
    }

    #[test]
    fn finds_comment_link() {
        let item = ItemRef::find_in(
            "https://old.reddit.com/r/gtaonline/comments/hsq1xk/heist_crew_wanted/fyb2k3d/?context=3",
        );

        assert_eq!(item, Some(ItemRef::new(ItemKind::Comment, "fyb2k3d")));
    }

    #[test]
    fn finds_short_and_message_links() {
        assert_eq!(
            ItemRef::find_in("https://redd.it/hsq1xk"),
            Some(ItemRef::new(ItemKind::Submission, "hsq1xk"))
        );
        assert_eq!(
            ItemRef::find_in("<https://www.reddit.com/message/messages/q8r2z1>"),
            Some(ItemRef::new(ItemKind::Message, "q8r2z1"))
        );
    }

    #[test]
    fn earliest_link_wins() {
        let item = ItemRef::find_in(
            "https://redd.it/first and https://www.reddit.com/r/gtaonline/comments/second/",
        );

        assert_eq!(item, Some(ItemRef::new(ItemKind::Submission, "first")));
    }

    #[test]
    fn ignores_other_links() {
        assert_eq!(ItemRef::find_in("https://www.reddit.com/r/gtaonline/"), None);
        assert_eq!(ItemRef::find_in("no links here"), None);
    }
}
