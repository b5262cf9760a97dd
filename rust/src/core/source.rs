//! Inputs of the reactions dialog: the aggregation snapshot for one message and
//! the room membership used to resolve sender names.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A single reaction instance on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub event_id: String,
    pub sender: String,
}

/// All reaction events that share one key (emoji).
///
/// `events` behaves as a set keyed by `event_id`; use [`ReactionGroup::insert`]
/// to keep that invariant when building a group by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionGroup {
    pub key: String,
    #[serde(default)]
    pub events: Vec<ReactionEvent>,
}

impl ReactionGroup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            events: Vec::new(),
        }
    }

    /// Adds `event` unless an event with the same id is already present.
    /// Returns whether the event was added.
    pub fn insert(&mut self, event: ReactionEvent) -> bool {
        if self.events.iter().any(|e| e.event_id == event.event_id) {
            return false;
        }
        self.events.push(event);
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Anything that can hand out the reactions of one message grouped by key.
///
/// Groups may come in any order; the dialog sorts them itself.
pub trait ReactionSource {
    fn groups(&self) -> &[ReactionGroup];
}

/// Resolves a user id to the display name used in the room.
pub trait MemberDirectory {
    /// `None` means the member is unknown; callers fall back to the raw id.
    fn display_name(&self, user_id: &str) -> Option<String>;
}

impl MemberDirectory for HashMap<String, String> {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.get(user_id).cloned()
    }
}

/// Flat reaction as it arrives from the timeline, before grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub key: String,
    pub event_id: String,
    pub sender: String,
    #[serde(default)]
    pub redacted: bool,
}

/// Immutable grouping of a message's reactions taken when the dialog opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSnapshot {
    #[serde(default)]
    pub groups: Vec<ReactionGroup>,
}

impl ReactionSnapshot {
    pub fn new(groups: Vec<ReactionGroup>) -> Self {
        Self { groups }
    }

    /// Groups flat annotations by key in first-seen order.
    ///
    /// Redacted annotations are dropped, as are repeated event ids.
    pub fn from_annotations<I>(annotations: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        let mut groups: Vec<ReactionGroup> = Vec::new();
        let mut index_by_key: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for annotation in annotations {
            if annotation.redacted {
                skipped += 1;
                continue;
            }
            let idx = *index_by_key
                .entry(annotation.key.clone())
                .or_insert_with(|| {
                    groups.push(ReactionGroup::new(annotation.key.clone()));
                    groups.len() - 1
                });
            let added = groups[idx].insert(ReactionEvent {
                event_id: annotation.event_id,
                sender: annotation.sender,
            });
            if !added {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "dropped redacted or duplicate annotations");
        }
        // A key whose only annotations were redacted never opens a group.
        Self { groups }
    }

    pub fn total_count(&self) -> usize {
        self.groups.iter().map(ReactionGroup::len).sum()
    }
}

impl ReactionSource for ReactionSnapshot {
    fn groups(&self) -> &[ReactionGroup] {
        &self.groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMember {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Membership of the room the message lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomMembers {
    members: Vec<RoomMember>,
}

impl RoomMembers {
    pub fn new(members: Vec<RoomMember>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberDirectory for RoomMembers {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .and_then(|m| m.display_name.clone())
            .filter(|name| !name.trim().is_empty())
    }
}

/// On-disk input for the CLI and desktop host: one message's reactions plus
/// the room members needed to name the senders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogFixture {
    #[serde(default)]
    pub members: RoomMembers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl DialogFixture {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn snapshot(&self) -> ReactionSnapshot {
        ReactionSnapshot::from_annotations(self.annotations.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(key: &str, event_id: &str, sender: &str) -> Annotation {
        Annotation {
            key: key.to_string(),
            event_id: event_id.to_string(),
            sender: sender.to_string(),
            redacted: false,
        }
    }

    #[test]
    fn from_annotations_groups_in_first_seen_order() {
        let snapshot = ReactionSnapshot::from_annotations(vec![
            annotation("\u{2764}\u{FE0F}", "$1", "@c:x"),
            annotation("\u{1F44D}", "$2", "@a:x"),
            annotation("\u{2764}\u{FE0F}", "$3", "@b:x"),
        ]);
        let keys: Vec<&str> = snapshot.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["\u{2764}\u{FE0F}", "\u{1F44D}"]);
        assert_eq!(snapshot.groups[0].len(), 2);
        assert_eq!(snapshot.total_count(), 3);
    }

    #[test]
    fn from_annotations_drops_redacted_and_duplicates() {
        let mut redacted = annotation("\u{1F389}", "$9", "@a:x");
        redacted.redacted = true;
        let snapshot = ReactionSnapshot::from_annotations(vec![
            annotation("\u{1F44D}", "$1", "@a:x"),
            annotation("\u{1F44D}", "$1", "@a:x"),
            redacted,
        ]);
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.groups[0].len(), 1);
    }

    #[test]
    fn room_members_treat_blank_names_as_unknown() {
        let members = RoomMembers::new(vec![
            RoomMember {
                user_id: "@a:x".into(),
                display_name: Some("Alice".into()),
            },
            RoomMember {
                user_id: "@b:x".into(),
                display_name: Some("  ".into()),
            },
            RoomMember {
                user_id: "@c:x".into(),
                display_name: None,
            },
        ]);
        assert_eq!(members.display_name("@a:x").as_deref(), Some("Alice"));
        assert_eq!(members.display_name("@b:x"), None);
        assert_eq!(members.display_name("@c:x"), None);
        assert_eq!(members.display_name("@nobody:x"), None);
    }

    #[test]
    fn fixture_parses_minimal_json() {
        let fixture = DialogFixture::from_json_str(
            r#"{
                "members": [{"user_id": "@a:x", "display_name": "Alice"}],
                "annotations": [{"key": "👍", "event_id": "$1", "sender": "@a:x"}]
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.members.len(), 1);
        let snapshot = fixture.snapshot();
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.groups[0].key, "👍");
    }

    #[test]
    fn fixture_load_reports_path_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = DialogFixture::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
