use serde::Serialize;

use super::annotations::{sorted_by_popularity, ReactionAnnotation};
use super::filter::FilterState;
use super::source::ReactionSource;

/// What a summary chip stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "emoji", rename_all = "snake_case")]
pub enum SummaryKey {
    /// The synthetic "All" entry. Only ever clears the filter.
    All,
    Emoji(String),
}

impl SummaryKey {
    pub fn emoji(&self) -> Option<&str> {
        match self {
            SummaryKey::All => None,
            SummaryKey::Emoji(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiSummary {
    pub key: SummaryKey,
    pub count: usize,
}

impl EmojiSummary {
    pub fn is_all(&self) -> bool {
        matches!(self.key, SummaryKey::All)
    }
}

/// Chip list for the dialog header: `All` with the total first, then one
/// entry per emoji in popularity order.
pub fn build_summaries(source: &impl ReactionSource) -> Vec<EmojiSummary> {
    let real: Vec<EmojiSummary> = sorted_by_popularity(source)
        .into_iter()
        .map(|group| EmojiSummary {
            key: SummaryKey::Emoji(group.key.clone()),
            count: group.len(),
        })
        .collect();
    let total = real.iter().map(|s| s.count).sum();

    let mut summaries = Vec::with_capacity(real.len() + 1);
    summaries.push(EmojiSummary {
        key: SummaryKey::All,
        count: total,
    });
    summaries.extend(real);
    summaries
}

/// Rows matching `filter`, in their derived order.
pub fn visible_rows<'a>(
    annotations: &'a [ReactionAnnotation],
    filter: &FilterState,
) -> Vec<&'a ReactionAnnotation> {
    match filter.emoji() {
        None => annotations.iter().collect(),
        Some(emoji) => annotations.iter().filter(|a| a.emoji == emoji).collect(),
    }
}
