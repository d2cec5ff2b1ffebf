use tracing::{debug, info};

use crate::error::Result;
use crate::gateway::GatewayTask;
use crate::payload::ImagePayload;
use crate::presets::PresetKey;
use crate::revision::{Revision, RevisionHistory, RevisionId};

/// Label given to the base revision of an uploaded image.
pub const LABEL_ORIGINAL: &str = "Original Image";

/// Status line shown while a from-scratch generation is in flight.
pub const STATUS_GENERATING: &str = "Generating your vision... ✨";
/// Status line shown while a revision is in flight.
pub const STATUS_REVISING: &str = "Applying AI magic... 🪄";

pub const ERR_EMPTY_GENERATE_PROMPT: &str = "Please enter a prompt to generate an image.";
pub const ERR_EMPTY_REVISE_PROMPT: &str = "Please enter a revision command.";
pub const ERR_NO_IMAGE: &str = "Please upload or generate an image first.";
pub const ERR_UPLOAD_FAILED: &str = "Failed to read the uploaded file.";

/// The editing session: revision history, the original/current pointers,
/// and the loading/error status the UI renders.
///
/// Gateway calls run elsewhere (the GUI drives them on a worker thread),
/// so every gateway-backed intent is split in two: a `begin_*` method that
/// validates, flips the loading flag, and hands back the task to execute,
/// and [`Session::finish`] which applies the outcome. The loading flag is
/// true exactly between the two; `finish` clears it on every path.
///
/// Only one task may be in flight at a time: `begin_*` refuse while
/// loading, and the UI additionally disables the triggering actions.
pub struct Session {
    history: RevisionHistory,
    original: Option<RevisionId>,
    current: Option<RevisionId>,
    /// `Some(status line)` while a gateway task is in flight.
    loading: Option<String>,
    error: Option<String>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: RevisionHistory::new(),
            original: None,
            current: None,
            loading: None,
            error: None,
            next_id: 0,
        }
    }

    pub fn history(&self) -> &RevisionHistory {
        &self.history
    }

    /// The first revision of the session, fixed until the next upload or
    /// from-scratch generation.
    pub fn original(&self) -> Option<&Revision> {
        self.original.and_then(|id| self.history.get(id))
    }

    /// The revision currently treated as the editable subject.
    pub fn current(&self) -> Option<&Revision> {
        self.current.and_then(|id| self.history.get(id))
    }

    pub fn current_id(&self) -> Option<RevisionId> {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn loading_message(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Establish an uploaded image as the new session base.
    pub fn upload(&mut self, payload: ImagePayload) {
        let revision = self.new_revision(payload, LABEL_ORIGINAL);
        info!(id = %revision.id(), "upload accepted, session reset");
        self.reset_to(revision);
        self.error = None;
    }

    /// Record a failed upload read; nothing else changes.
    pub fn fail_upload(&mut self) {
        self.error = Some(ERR_UPLOAD_FAILED.to_string());
    }

    /// Start a from-scratch generation. Returns the task to run, or `None`
    /// when the request was rejected (empty prompt, or already loading).
    pub fn begin_generate(&mut self, prompt: &str) -> Option<GatewayTask> {
        if self.is_loading() {
            debug!("generate refused: a gateway task is already in flight");
            return None;
        }
        if prompt.is_empty() {
            self.error = Some(ERR_EMPTY_GENERATE_PROMPT.to_string());
            return None;
        }
        self.loading = Some(STATUS_GENERATING.to_string());
        self.error = None;
        Some(GatewayTask::Generate {
            prompt: prompt.to_string(),
        })
    }

    /// Start a revision of the current image. Returns the task to run, or
    /// `None` when rejected (no image, empty prompt, or already loading).
    pub fn begin_revise(&mut self, prompt: &str) -> Option<GatewayTask> {
        if self.is_loading() {
            debug!("revise refused: a gateway task is already in flight");
            return None;
        }
        let Some(current) = self.current() else {
            self.error = Some(ERR_NO_IMAGE.to_string());
            return None;
        };
        if prompt.is_empty() {
            self.error = Some(ERR_EMPTY_REVISE_PROMPT.to_string());
            return None;
        }
        let source = current.image().clone();
        self.loading = Some(STATUS_REVISING.to_string());
        self.error = None;
        Some(GatewayTask::Edit {
            source,
            prompt: prompt.to_string(),
        })
    }

    /// Apply a canned preset prompt, exactly like a typed revise.
    pub fn apply_preset(&mut self, key: PresetKey) -> Option<GatewayTask> {
        self.begin_revise(key.preset().prompt)
    }

    /// Apply the outcome of a gateway task started by a `begin_*` method.
    ///
    /// On success a generation resets the session to a fresh base and an
    /// edit appends a new revision; on failure the prior state is left
    /// untouched and the error message is set. The loading flag is
    /// cleared unconditionally.
    pub fn finish(&mut self, task: GatewayTask, result: Result<ImagePayload>) {
        match result {
            Ok(payload) => match task {
                GatewayTask::Generate { prompt } => {
                    let label = format!("Generated: \"{prompt}\"");
                    let revision = self.new_revision(payload, label);
                    info!(id = %revision.id(), "generation complete, session reset");
                    self.reset_to(revision);
                }
                GatewayTask::Edit { prompt, .. } => {
                    let revision = self.new_revision(payload, prompt);
                    let id = revision.id();
                    self.history.append(revision);
                    self.current = Some(id);
                    info!(id = %id, revisions = self.history.len(), "revision appended");
                }
            },
            Err(err) => {
                debug!(error = %err, "gateway task failed, state preserved");
                self.error = Some(err.to_string());
            }
        }
        // The flag must be false on every exit path.
        self.loading = None;
    }

    /// Revert to an earlier revision, discarding everything after it.
    /// An id not present in the history is a silent no-op.
    pub fn revert_to(&mut self, id: RevisionId) {
        match self.history.revert(id) {
            Some(target) => {
                self.current = Some(target);
                info!(id = %target, revisions = self.history.len(), "reverted");
            }
            None => debug!(id = %id, "revert ignored: unknown revision id"),
        }
    }

    fn new_revision(&mut self, image: ImagePayload, label: impl Into<String>) -> Revision {
        let id = RevisionId(self.next_id);
        self.next_id += 1;
        Revision::new(id, image, label)
    }

    fn reset_to(&mut self, revision: Revision) {
        let id = revision.id();
        self.history.reset(revision);
        self.original = Some(id);
        self.current = Some(id);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
