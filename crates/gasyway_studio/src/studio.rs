//! Token studio
//!
//! Drives the editing flow end to end:
//!
//! edit → change tracker → save → store → apply locally → broadcast → every
//! bound listener re-applies.
//!
//! Every operation takes `&mut self`, so a load and a save can never overlap
//! on the same studio. Dropping an in-flight future leaves the tracker as it
//! was before the call.

use crate::editor::{EditorState, TokenEdit, TokenEditor};
use crate::error::EditError;
use crate::notify::{Notice, Notifier};
use gasyway_store::{CleanupReport, Credential, StoreError, TokenStoreClient, Transport};
use gasyway_theme::{apply, StyleTarget, TokenBus, TokenSet};
use serde_json::{Map, Value};

/// Result of [`ThemeStudio::save`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Persisted, applied and broadcast to `listeners` subscribers
    Saved { listeners: usize },
    /// Nothing to save: the working copy equals the baseline
    Unchanged,
}

/// Editor session over one token store
pub struct ThemeStudio<'a, T: Transport> {
    client: &'a TokenStoreClient<T>,
    credential: Credential,
    target: &'a dyn StyleTarget,
    bus: &'a TokenBus,
    notifier: &'a dyn Notifier,
    editor: TokenEditor,
    live_preview: bool,
}

impl<'a, T: Transport> ThemeStudio<'a, T> {
    pub fn new(
        client: &'a TokenStoreClient<T>,
        credential: Credential,
        target: &'a dyn StyleTarget,
        bus: &'a TokenBus,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            client,
            credential,
            target,
            bus,
            notifier,
            editor: TokenEditor::new(),
            live_preview: false,
        }
    }

    /// Apply the working copy to the target after every edit and reset
    pub fn with_live_preview(mut self, enabled: bool) -> Self {
        self.live_preview = enabled;
        self
    }

    pub fn editor(&self) -> &TokenEditor {
        &self.editor
    }

    pub fn state(&self) -> EditorState {
        self.editor.state()
    }

    pub fn working(&self) -> &TokenSet {
        self.editor.working()
    }

    fn preview(&self, tokens: &TokenSet) {
        if !self.live_preview {
            return;
        }
        if let Err(e) = apply(tokens, self.target) {
            tracing::warn!("token preview failed: {e}");
        }
    }

    /// Load the session's current token set into both working copy and
    /// baseline.
    ///
    /// On failure the user is notified and the editor keeps its state.
    pub async fn load(&mut self) -> bool {
        match self.client.fetch_current_tokens(&self.credential).await {
            Ok(tokens) => {
                if self.editor.is_dirty() {
                    tracing::warn!(
                        fields = ?self.editor.unsaved_fields(),
                        "reload discarded unsaved token edits"
                    );
                }
                self.editor.replace(tokens);
                self.preview(self.editor.working());
                true
            }
            Err(e) => {
                self.notifier.notify(Notice::error(format!(
                    "Failed to load design tokens: {}",
                    e.user_message()
                )));
                false
            }
        }
    }

    /// Edit one field of the working copy
    pub fn edit(&mut self, edit: TokenEdit) -> Result<EditorState, EditError> {
        let state = self.editor.edit(edit)?;
        self.preview(self.editor.working());
        Ok(state)
    }

    /// Edit one field by wire key
    pub fn edit_key(&mut self, key: &str, value: &Value) -> Result<EditorState, EditError> {
        let state = self.editor.edit_key(key, value)?;
        self.preview(self.editor.working());
        Ok(state)
    }

    /// Apply a batch of wire-key edits (e.g. read from a file) over the
    /// working copy. All or nothing.
    pub fn import(&mut self, fields: &Map<String, Value>) -> Result<EditorState, EditError> {
        let state = self.editor.import(fields)?;
        self.preview(self.editor.working());
        Ok(state)
    }

    /// Persist the working copy.
    ///
    /// Only acts when dirty. On success the baseline becomes the saved set,
    /// which is then applied to the target and published on the bus. On
    /// failure the editor stays dirty and the server message is shown.
    pub async fn save(&mut self) -> Result<SaveOutcome, StoreError> {
        if !self.editor.can_save() {
            return Ok(SaveOutcome::Unchanged);
        }

        let tokens = self.editor.working().clone();
        if let Err(e) = self.client.save_tokens(&tokens, &self.credential).await {
            self.notifier.notify(Notice::error(format!(
                "Failed to save design tokens: {}",
                e.user_message()
            )));
            return Err(e);
        }

        self.editor.mark_saved();
        let applied = apply(&tokens, self.target);
        let listeners = self.bus.publish(&tokens);
        match applied {
            Ok(_) => self
                .notifier
                .notify(Notice::success("Design tokens saved and applied")),
            Err(e) => {
                tracing::warn!("saved design tokens but could not apply them: {e}");
                self.notifier.notify(Notice::warning(format!(
                    "Design tokens saved but not applied: {e}"
                )));
            }
        }

        Ok(SaveOutcome::Saved { listeners })
    }

    /// Drop unsaved edits. No network call.
    pub fn reset(&mut self) -> bool {
        if !self.editor.reset() {
            return false;
        }
        self.preview(self.editor.working());
        self.notifier.notify(Notice::info("Changes discarded"));
        true
    }

    /// Run the store's duplicate cleanup and report the outcome
    pub async fn cleanup_duplicates(&self) -> Result<CleanupReport, StoreError> {
        match self.client.cleanup_duplicates(&self.credential).await {
            Ok(report) => {
                self.notifier.notify(Notice::success(report.message.clone()));
                Ok(report)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error(format!("Cleanup failed: {}", e.user_message())));
                Err(e)
            }
        }
    }
}
