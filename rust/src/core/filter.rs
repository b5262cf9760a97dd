use serde::Serialize;

use super::summary::EmojiSummary;

/// Which emoji the sender list is narrowed to, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "emoji", rename_all = "snake_case")]
pub enum FilterState {
    #[default]
    NoFilter,
    ByEmoji(String),
}

impl FilterState {
    pub fn emoji(&self) -> Option<&str> {
        match self {
            FilterState::NoFilter => None,
            FilterState::ByEmoji(e) => Some(e),
        }
    }

    /// Drops a selection that no longer names a real summary entry.
    pub fn revalidate(self, summaries: &[EmojiSummary]) -> FilterState {
        match self {
            FilterState::NoFilter => FilterState::NoFilter,
            FilterState::ByEmoji(emoji) => set_filter(&emoji, summaries),
        }
    }
}

/// Filter transition for a chip click or a programmatic request.
///
/// Only real entries can be selected; the synthetic "All" entry never
/// matches, so anything unknown lands on [`FilterState::NoFilter`].
pub fn set_filter(requested: &str, summaries: &[EmojiSummary]) -> FilterState {
    let exists = summaries
        .iter()
        .any(|s| s.key.emoji() == Some(requested));
    if exists {
        FilterState::ByEmoji(requested.to_string())
    } else {
        FilterState::NoFilter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::SummaryKey;

    fn summaries() -> Vec<EmojiSummary> {
        vec![
            EmojiSummary {
                key: SummaryKey::All,
                count: 3,
            },
            EmojiSummary {
                key: SummaryKey::Emoji("\u{1F44D}".into()),
                count: 2,
            },
            EmojiSummary {
                key: SummaryKey::Emoji("\u{2764}\u{FE0F}".into()),
                count: 1,
            },
        ]
    }

    #[test]
    fn selects_existing_emoji() {
        assert_eq!(
            set_filter("\u{1F44D}", &summaries()),
            FilterState::ByEmoji("\u{1F44D}".into())
        );
    }

    #[test]
    fn unknown_emoji_clears_filter() {
        assert_eq!(set_filter("\u{1F389}", &summaries()), FilterState::NoFilter);
    }

    #[test]
    fn all_label_never_matches() {
        assert_eq!(set_filter("All", &summaries()), FilterState::NoFilter);
    }

    #[test]
    fn real_emoji_spelled_like_all_label_is_selectable() {
        let mut s = summaries();
        s.push(EmojiSummary {
            key: SummaryKey::Emoji("All".into()),
            count: 1,
        });
        assert_eq!(set_filter("All", &s), FilterState::ByEmoji("All".into()));
    }

    #[test]
    fn revalidate_collapses_stale_selection() {
        let stale = FilterState::ByEmoji("\u{1F389}".into());
        assert_eq!(stale.revalidate(&summaries()), FilterState::NoFilter);

        let live = FilterState::ByEmoji("\u{2764}\u{FE0F}".into());
        assert_eq!(live.clone().revalidate(&summaries()), live);
    }
}
