use crate::state::ReactionsDialogState;

#[derive(uniffi::Enum, Clone, Debug, PartialEq, Eq)]
pub enum ReactionsUpdate {
    /// Full render state after a filter change.
    FullState(ReactionsDialogState),
    /// The dialog was dismissed; the host should tear it down.
    Finished { rev: u64 },
}

impl ReactionsUpdate {
    pub fn rev(&self) -> u64 {
        match self {
            ReactionsUpdate::FullState(s) => s.rev,
            ReactionsUpdate::Finished { rev } => *rev,
        }
    }
}
