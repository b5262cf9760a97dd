use serde::Serialize;

use crate::config::DialogConfig;
use crate::core::{Chip, ReactionsDialog, SummaryKey};

/// Full render state of the dialog, as handed to native hosts.
#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionsDialogState {
    pub rev: u64,
    pub title: String,
    pub chips: Vec<ReactionChip>,
    pub rows: Vec<ReactionRow>,
    pub selected_emoji: Option<String>,
}

#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionChip {
    pub key: ChipKey,
    pub label: String,
    pub count: u32,
    pub selected: bool,
}

#[derive(uniffi::Enum, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipKey {
    All,
    Emoji { emoji: String },
}

#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionRow {
    pub emoji: String,
    pub sender_name: String,
}

impl From<&SummaryKey> for ChipKey {
    fn from(key: &SummaryKey) -> Self {
        match key {
            SummaryKey::All => ChipKey::All,
            SummaryKey::Emoji(emoji) => ChipKey::Emoji {
                emoji: emoji.clone(),
            },
        }
    }
}

impl From<ChipKey> for SummaryKey {
    fn from(key: ChipKey) -> Self {
        match key {
            ChipKey::All => SummaryKey::All,
            ChipKey::Emoji { emoji } => SummaryKey::Emoji(emoji),
        }
    }
}

impl From<Chip> for ReactionChip {
    fn from(chip: Chip) -> Self {
        Self {
            key: ChipKey::from(&chip.key),
            label: chip.label,
            count: u32::try_from(chip.count).unwrap_or(u32::MAX),
            selected: chip.selected,
        }
    }
}

impl ReactionsDialogState {
    pub fn project(dialog: &ReactionsDialog, config: &DialogConfig, rev: u64) -> Self {
        Self {
            rev,
            title: dialog.title().to_string(),
            chips: dialog.chips().into_iter().map(ReactionChip::from).collect(),
            rows: dialog
                .rows()
                .into_iter()
                .map(|row| ReactionRow {
                    emoji: row.emoji.clone(),
                    sender_name: config.display_name(&row.sender_name),
                })
                .collect(),
            selected_emoji: dialog.filter().emoji().map(str::to_string),
        }
    }
}
