use crate::state::ChipKey;

#[derive(uniffi::Enum, Debug, Clone, PartialEq, Eq)]
pub enum ReactionsAction {
    /// A summary chip was clicked.
    SelectChip { key: ChipKey },
    /// The host's close affordance was used.
    Dismiss,
}

impl ReactionsAction {
    /// Log-safe action tag.
    pub fn tag(&self) -> &'static str {
        match self {
            ReactionsAction::SelectChip { .. } => "SelectChip",
            ReactionsAction::Dismiss => "Dismiss",
        }
    }
}
