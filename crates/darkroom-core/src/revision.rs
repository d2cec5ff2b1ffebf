use crate::payload::ImagePayload;

/// Creation-ordered identifier of a revision, unique within a session.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RevisionId(pub u64);

impl std::fmt::Display for RevisionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One accepted image state. Immutable once created — every edit
/// produces a new revision rather than touching an existing one.
#[derive(Clone, Debug)]
pub struct Revision {
    id: RevisionId,
    image: ImagePayload,
    label: String,
}

impl Revision {
    pub fn new(id: RevisionId, image: ImagePayload, label: impl Into<String>) -> Self {
        Self {
            id,
            image,
            label: label.into(),
        }
    }

    pub fn id(&self) -> RevisionId {
        self.id
    }

    pub fn image(&self) -> &ImagePayload {
        &self.image
    }

    /// How this revision was produced: "Original Image", `Generated: "<prompt>"`,
    /// or the literal revise prompt.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The ordered log of revisions for one editing session.
///
/// A single timeline with no redo branch: reverting truncates everything
/// after the target, and a later edit starts a fresh suffix. The sequence
/// never shrinks any other way and is dropped with the session.
#[derive(Default)]
pub struct RevisionHistory {
    revisions: Vec<Revision>,
}

impl RevisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Revision> {
        self.revisions.iter()
    }

    pub fn first(&self) -> Option<&Revision> {
        self.revisions.first()
    }

    pub fn last(&self) -> Option<&Revision> {
        self.revisions.last()
    }

    pub fn get(&self, id: RevisionId) -> Option<&Revision> {
        self.revisions.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RevisionId) -> bool {
        self.get(id).is_some()
    }

    /// Add a revision to the end of the timeline.
    pub fn append(&mut self, revision: Revision) {
        self.revisions.push(revision);
    }

    /// Truncate the timeline so it ends at the revision with `target`.
    ///
    /// Returns the target id when found; the pruned suffix is permanently
    /// discarded. An unknown id is a silent no-op (callers only pass ids
    /// taken from this history) and returns `None`.
    pub fn revert(&mut self, target: RevisionId) -> Option<RevisionId> {
        let index = self.revisions.iter().position(|r| r.id() == target)?;
        self.revisions.truncate(index + 1);
        Some(target)
    }

    /// Replace the whole timeline with a single base revision.
    pub fn reset(&mut self, revision: Revision) {
        self.revisions.clear();
        self.revisions.push(revision);
    }
}

impl<'a> IntoIterator for &'a RevisionHistory {
    type Item = &'a Revision;
    type IntoIter = std::slice::Iter<'a, Revision>;

    fn into_iter(self) -> Self::IntoIter {
        self.revisions.iter()
    }
}
