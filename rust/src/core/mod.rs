//! The reactions dialog model.
//!
//! Everything here is synchronous and UI-toolkit agnostic: hosts (the iced
//! desktop app, the CLI, native apps over FFI) open a [`ReactionsDialog`],
//! forward chip clicks to [`ReactionsDialog::select`], and render
//! [`ReactionsDialog::chips`] and [`ReactionsDialog::rows`].

mod annotations;
mod collation;
mod filter;
mod source;
mod summary;

pub use annotations::{derive_annotations, ReactionAnnotation};
pub use collation::locale_cmp;
pub use filter::{set_filter, FilterState};
pub use source::{
    Annotation, DialogFixture, MemberDirectory, ReactionEvent, ReactionGroup, ReactionSnapshot,
    ReactionSource, RoomMember, RoomMembers,
};
pub use summary::{build_summaries, visible_rows, EmojiSummary, SummaryKey};

use serde::Serialize;

use crate::config::Labels;

/// A summary entry as the host renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub key: SummaryKey,
    /// Emoji glyph, or the localized "All" label.
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// One open reactions dialog.
///
/// Rows and summaries are derived once at [`open`](Self::open) from the
/// snapshot; only the filter changes afterwards. Dropping the value is
/// closing the dialog.
#[derive(Debug, Clone)]
pub struct ReactionsDialog {
    annotations: Vec<ReactionAnnotation>,
    summaries: Vec<EmojiSummary>,
    filter: FilterState,
    labels: Labels,
}

impl ReactionsDialog {
    pub fn open(
        source: &impl ReactionSource,
        members: &impl MemberDirectory,
        labels: Labels,
    ) -> Self {
        let annotations = derive_annotations(source, members);
        let summaries = build_summaries(source);
        tracing::debug!(
            groups = summaries.len() - 1,
            rows = annotations.len(),
            "reactions dialog opened"
        );
        Self {
            annotations,
            summaries,
            filter: FilterState::NoFilter,
            labels,
        }
    }

    /// Re-derives from a fresh snapshot, keeping the filter only if its emoji
    /// is still present.
    pub fn reload(&mut self, source: &impl ReactionSource, members: &impl MemberDirectory) {
        self.annotations = derive_annotations(source, members);
        self.summaries = build_summaries(source);
        let previous = std::mem::take(&mut self.filter);
        self.filter = previous.clone().revalidate(&self.summaries);
        if self.filter != previous {
            tracing::debug!(?previous, "reactions filter dropped on reload");
        }
    }

    /// Chip click.
    pub fn select(&mut self, key: &SummaryKey) {
        match key {
            SummaryKey::All => self.clear_filter(),
            SummaryKey::Emoji(emoji) => self.select_emoji(emoji),
        }
    }

    /// Narrows the rows to `emoji`, or shows everything if it is not one of
    /// the message's reactions.
    pub fn select_emoji(&mut self, emoji: &str) {
        self.filter = set_filter(emoji, &self.summaries);
        tracing::trace!(filter = ?self.filter, "reactions filter changed");
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterState::NoFilter;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn title(&self) -> &str {
        &self.labels.title
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn summaries(&self) -> &[EmojiSummary] {
        &self.summaries
    }

    pub fn annotations(&self) -> &[ReactionAnnotation] {
        &self.annotations
    }

    pub fn chips(&self) -> Vec<Chip> {
        self.summaries
            .iter()
            .map(|summary| {
                let (label, selected) = match &summary.key {
                    SummaryKey::All => (self.labels.all.clone(), self.filter.emoji().is_none()),
                    SummaryKey::Emoji(emoji) => {
                        (emoji.clone(), self.filter.emoji() == Some(emoji.as_str()))
                    }
                };
                Chip {
                    key: summary.key.clone(),
                    label,
                    count: summary.count,
                    selected,
                }
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<&ReactionAnnotation> {
        visible_rows(&self.annotations, &self.filter)
    }

    pub fn total_count(&self) -> usize {
        self.summaries.first().map(|s| s.count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const THUMBS: &str = "\u{1F44D}";
    const HEART: &str = "\u{2764}\u{FE0F}";

    fn snapshot(groups: Vec<(&str, Vec<&str>)>) -> ReactionSnapshot {
        ReactionSnapshot::new(
            groups
                .into_iter()
                .map(|(key, senders)| {
                    let mut g = ReactionGroup::new(key);
                    for sender in senders {
                        g.insert(ReactionEvent {
                            event_id: format!("${key}{sender}"),
                            sender: sender.to_string(),
                        });
                    }
                    g
                })
                .collect(),
        )
    }

    fn members() -> HashMap<String, String> {
        [("A", "Bob"), ("B", "Alice"), ("C", "Carol")]
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    fn pairs(dialog: &ReactionsDialog) -> Vec<(String, String)> {
        dialog
            .rows()
            .into_iter()
            .map(|r| (r.emoji.clone(), r.sender_name.clone()))
            .collect()
    }

    #[test]
    fn chips_mark_all_selected_by_default() {
        let dialog = ReactionsDialog::open(
            &snapshot(vec![(THUMBS, vec!["A", "B"]), (HEART, vec!["C"])]),
            &members(),
            Labels::default(),
        );
        let chips = dialog.chips();
        assert_eq!(chips[0].label, "All");
        assert!(chips[0].selected);
        assert!(chips[1..].iter().all(|c| !c.selected));
    }

    #[test]
    fn selecting_a_chip_moves_the_selection() {
        let mut dialog = ReactionsDialog::open(
            &snapshot(vec![(THUMBS, vec!["A", "B"]), (HEART, vec!["C"])]),
            &members(),
            Labels::default(),
        );
        dialog.select(&SummaryKey::Emoji(HEART.into()));

        let chips = dialog.chips();
        assert!(!chips[0].selected);
        assert!(chips.iter().any(|c| c.label == HEART && c.selected));
        assert_eq!(pairs(&dialog), vec![(HEART.to_string(), "Carol".to_string())]);

        dialog.select(&SummaryKey::All);
        assert_eq!(dialog.rows().len(), 3);
    }

    #[test]
    fn all_chip_uses_configured_label() {
        let labels = Labels {
            title: "Réactions".into(),
            all: "Tout".into(),
        };
        let dialog = ReactionsDialog::open(&ReactionSnapshot::default(), &members(), labels);
        assert_eq!(dialog.title(), "Réactions");
        assert_eq!(dialog.chips()[0].label, "Tout");
        assert_eq!(dialog.chips()[0].count, 0);
        assert!(dialog.rows().is_empty());
    }

    #[test]
    fn reload_drops_filter_for_removed_emoji() {
        let mut dialog = ReactionsDialog::open(
            &snapshot(vec![(THUMBS, vec!["A", "B"]), (HEART, vec!["C"])]),
            &members(),
            Labels::default(),
        );
        dialog.select_emoji(HEART);
        assert_eq!(dialog.filter(), &FilterState::ByEmoji(HEART.into()));

        dialog.reload(&snapshot(vec![(THUMBS, vec!["A", "B"])]), &members());
        assert_eq!(dialog.filter(), &FilterState::NoFilter);
        assert_eq!(dialog.rows().len(), 2);
    }

    #[test]
    fn reload_keeps_filter_for_surviving_emoji() {
        let mut dialog = ReactionsDialog::open(
            &snapshot(vec![(THUMBS, vec!["A"]), (HEART, vec!["C"])]),
            &members(),
            Labels::default(),
        );
        dialog.select_emoji(THUMBS);
        dialog.reload(&snapshot(vec![(THUMBS, vec!["A", "B"]), (HEART, vec!["C"])]), &members());
        assert_eq!(dialog.filter(), &FilterState::ByEmoji(THUMBS.into()));
        assert_eq!(dialog.rows().len(), 2);
    }
}
