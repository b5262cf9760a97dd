mod actions;
mod config;
mod core;
mod error;
mod logging;
mod state;
mod text;
mod updates;

use std::sync::{Arc, RwLock};

pub use crate::core::{
    build_summaries, derive_annotations, locale_cmp, set_filter, visible_rows, Annotation, Chip,
    DialogFixture, EmojiSummary, FilterState, MemberDirectory, ReactionAnnotation, ReactionEvent,
    ReactionGroup, ReactionSnapshot, ReactionSource, ReactionsDialog, RoomMember, RoomMembers,
    SummaryKey,
};
pub use actions::ReactionsAction;
pub use config::{DialogConfig, Labels, CONFIG_ENV};
pub use error::{LoadError, ReactionsError};
pub use logging::init_logging;
pub use state::*;
pub use text::truncate;
pub use updates::*;

uniffi::setup_scaffolding!();

#[uniffi::export(callback_interface)]
pub trait ReactionsReconciler: Send + Sync + 'static {
    fn reconcile(&self, update: ReactionsUpdate);
}

struct Session {
    dialog: ReactionsDialog,
    config: DialogConfig,
    rev: u64,
    finished: bool,
}

impl Session {
    fn state(&self) -> ReactionsDialogState {
        ReactionsDialogState::project(&self.dialog, &self.config, self.rev)
    }
}

/// Reactions dialog handle for native hosts.
///
/// Everything runs on the caller's thread: `dispatch` applies the action,
/// then hands the resulting update to the registered reconciler before
/// returning.
#[derive(uniffi::Object)]
pub struct FfiReactionsDialog {
    session: RwLock<Session>,
    reconciler: RwLock<Option<Arc<dyn ReactionsReconciler>>>,
}

#[uniffi::export]
impl FfiReactionsDialog {
    /// Opens the dialog over `fixture_json` (see [`DialogFixture`]), with an
    /// optional TOML [`DialogConfig`].
    #[uniffi::constructor]
    pub fn new(
        fixture_json: String,
        config_toml: Option<String>,
    ) -> Result<Arc<Self>, ReactionsError> {
        logging::init_logging();

        let fixture = DialogFixture::from_json_str(&fixture_json)?;
        let config = match config_toml {
            Some(raw) => DialogConfig::from_toml_str(&raw)?,
            None => DialogConfig::default(),
        };
        let dialog =
            ReactionsDialog::open(&fixture.snapshot(), &fixture.members, config.labels.clone());
        tracing::info!(
            members = fixture.members.len(),
            reactions = dialog.total_count(),
            "FfiReactionsDialog::new()"
        );

        Ok(Arc::new(Self {
            session: RwLock::new(Session {
                dialog,
                config,
                rev: 0,
                finished: false,
            }),
            reconciler: RwLock::new(None),
        }))
    }

    pub fn state(&self) -> ReactionsDialogState {
        match self.session.read() {
            Ok(g) => g.state(),
            Err(poison) => poison.into_inner().state(),
        }
    }

    pub fn dispatch(&self, action: ReactionsAction) {
        let tag = action.tag();
        let update = {
            let mut session = match self.session.write() {
                Ok(g) => g,
                Err(poison) => poison.into_inner(),
            };
            if session.finished {
                tracing::debug!(action = tag, "dialog already finished; ignoring action");
                return;
            }
            session.rev += 1;
            match action {
                ReactionsAction::SelectChip { key } => {
                    session.dialog.select(&SummaryKey::from(key));
                    ReactionsUpdate::FullState(session.state())
                }
                ReactionsAction::Dismiss => {
                    session.finished = true;
                    ReactionsUpdate::Finished { rev: session.rev }
                }
            }
        };
        tracing::debug!(action = tag, rev = update.rev(), "dispatched");
        self.emit(update);
    }

    /// Registers the receiver of updates, replacing any previous one.
    pub fn listen_for_updates(&self, reconciler: Box<dyn ReactionsReconciler>) {
        let reconciler: Arc<dyn ReactionsReconciler> = Arc::from(reconciler);
        match self.reconciler.write() {
            Ok(mut slot) => {
                *slot = Some(reconciler);
            }
            Err(poison) => {
                *poison.into_inner() = Some(reconciler);
            }
        }
    }
}

impl FfiReactionsDialog {
    fn emit(&self, update: ReactionsUpdate) {
        // Clone out of the lock so a reconciler may call back into `state()`.
        let reconciler = match self.reconciler.read() {
            Ok(g) => g.clone(),
            Err(poison) => poison.into_inner().clone(),
        };
        if let Some(reconciler) = reconciler {
            reconciler.reconcile(update);
        }
    }
}
