use serde::Serialize;

use super::collation::locale_cmp;
use super::source::{MemberDirectory, ReactionGroup, ReactionSource};

/// One row of the dialog: which emoji, and who sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionAnnotation {
    pub emoji: String,
    pub sender_name: String,
}

impl ReactionAnnotation {
    pub fn new(emoji: impl Into<String>, sender_name: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            sender_name: sender_name.into(),
        }
    }
}

/// Groups ordered by size, largest first. Equal sizes keep their input order.
pub(crate) fn sorted_by_popularity(source: &impl ReactionSource) -> Vec<&ReactionGroup> {
    let mut groups: Vec<&ReactionGroup> = source.groups().iter().collect();
    // `sort_by` is stable, which is what keeps ties in input order.
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

/// Flattens the snapshot into dialog rows.
///
/// Outer order is group popularity; inside a group senders are resolved
/// through `members` (unknown ids stay as-is) and sorted by name.
pub fn derive_annotations(
    source: &impl ReactionSource,
    members: &impl MemberDirectory,
) -> Vec<ReactionAnnotation> {
    let mut rows = Vec::with_capacity(source.groups().iter().map(ReactionGroup::len).sum());

    for group in sorted_by_popularity(source) {
        let mut names: Vec<String> = group
            .events
            .iter()
            .map(|event| {
                members
                    .display_name(&event.sender)
                    .unwrap_or_else(|| event.sender.clone())
            })
            .collect();
        names.sort_by(|a, b| locale_cmp(a, b));

        rows.extend(
            names
                .into_iter()
                .map(|name| ReactionAnnotation::new(group.key.clone(), name)),
        );
    }

    rows
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::source::{ReactionEvent, ReactionSnapshot};

    const THUMBS: &str = "\u{1F44D}";
    const HEART: &str = "\u{2764}\u{FE0F}";
    const PARTY: &str = "\u{1F389}";

    fn group(key: &str, senders: &[&str]) -> ReactionGroup {
        let mut g = ReactionGroup::new(key);
        for (i, sender) in senders.iter().enumerate() {
            g.insert(ReactionEvent {
                event_id: format!("${key}-{i}"),
                sender: sender.to_string(),
            });
        }
        g
    }

    fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn empty_snapshot_yields_no_rows() {
        let rows = derive_annotations(&ReactionSnapshot::default(), &HashMap::<String, String>::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn orders_groups_by_size_then_names_alphabetically() {
        let snapshot = ReactionSnapshot::new(vec![
            group(HEART, &["@c:x"]),
            group(THUMBS, &["@a:x", "@b:x"]),
        ]);
        let members = names(&[("@a:x", "Bob"), ("@b:x", "Alice"), ("@c:x", "Carol")]);

        let rows = derive_annotations(&snapshot, &members);
        assert_eq!(
            rows,
            vec![
                ReactionAnnotation::new(THUMBS, "Alice"),
                ReactionAnnotation::new(THUMBS, "Bob"),
                ReactionAnnotation::new(HEART, "Carol"),
            ]
        );
    }

    #[test]
    fn equal_sized_groups_keep_input_order() {
        let snapshot = ReactionSnapshot::new(vec![
            group(PARTY, &["@a:x"]),
            group(HEART, &["@b:x"]),
            group(THUMBS, &["@c:x", "@d:x"]),
        ]);
        let order: Vec<&str> = sorted_by_popularity(&snapshot)
            .into_iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(order, vec![THUMBS, PARTY, HEART]);
    }

    #[test]
    fn unknown_senders_fall_back_to_their_id() {
        let snapshot = ReactionSnapshot::new(vec![group(THUMBS, &["@zed:x", "@ghost:x"])]);
        let members = names(&[("@zed:x", "Zed")]);

        let rows = derive_annotations(&snapshot, &members);
        let senders: Vec<&str> = rows.iter().map(|r| r.sender_name.as_str()).collect();
        assert_eq!(senders, vec!["@ghost:x", "Zed"]);
    }
}
