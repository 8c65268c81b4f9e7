use crate::config::LayoutConfig;
use crate::types::ArtifactKind;
use std::collections::HashSet;
use std::path::Path;

/// Answers whether a document's artifact of a given kind currently exists.
///
/// Queries never fail: an artifact that cannot be found is simply absent.
pub trait PresenceOracle {
    fn exists(&self, document: &str, kind: ArtifactKind) -> bool;
}

// ---------------------------------------------------------------------------
// FsPresence
// ---------------------------------------------------------------------------

/// Checks the filesystem at the artifact's would-be output path.
pub struct FsPresence<'a> {
    root: &'a Path,
    layout: &'a LayoutConfig,
}

impl<'a> FsPresence<'a> {
    pub fn new(root: &'a Path, layout: &'a LayoutConfig) -> Self {
        Self { root, layout }
    }
}

impl PresenceOracle for FsPresence<'_> {
    fn exists(&self, document: &str, kind: ArtifactKind) -> bool {
        let path = self.root.join(self.layout.artifact_path(document, kind));
        let exists = path.exists();
        tracing::debug!(document, kind = %kind, path = %path.display(), exists, "presence check");
        exists
    }
}

// ---------------------------------------------------------------------------
// StaticPresence
// ---------------------------------------------------------------------------

/// In-memory oracle over a fixed set of present artifacts.
#[derive(Debug, Clone, Default)]
pub struct StaticPresence {
    present: HashSet<(String, ArtifactKind)>,
}

impl StaticPresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, document: impl Into<String>, kind: ArtifactKind) -> Self {
        self.insert(document, kind);
        self
    }

    pub fn insert(&mut self, document: impl Into<String>, kind: ArtifactKind) {
        self.present.insert((document.into(), kind));
    }
}

impl PresenceOracle for StaticPresence {
    fn exists(&self, document: &str, kind: ArtifactKind) -> bool {
        self.present.contains(&(document.to_string(), kind))
    }
}
