use crate::artifact::DocumentArtifacts;
use crate::config::Config;
use crate::error::{Result, TestgenError};
use crate::paths;
use crate::presence::PresenceOracle;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// SourceDocument
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Filename with the story suffix stripped; joins the document to its artifacts.
    pub id: String,
    pub filename: String,
}

/// List the user stories in the configured stories directory, sorted by
/// filename.
///
/// The stories directory must exist. Entries that are not regular files or
/// do not carry the story suffix are skipped.
pub fn list_documents(root: &Path, config: &Config) -> Result<Vec<SourceDocument>> {
    let dir = config.layout.stories_dir(root);
    if !dir.is_dir() {
        return Err(TestgenError::StoriesDirNotFound(dir));
    }

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::warn!(entry = ?entry.path(), "skipping non UTF-8 file name");
            continue;
        };
        let Some(id) = paths::document_id(name) else {
            continue;
        };
        if !entry.path().is_file() {
            tracing::debug!(name, "skipping non-file entry");
            continue;
        }
        documents.push(SourceDocument {
            id: id.to_string(),
            filename: name.to_string(),
        });
    }

    documents.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(documents)
}

// ---------------------------------------------------------------------------
// ScanReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub stories_dir: String,
    pub documents: Vec<DocumentArtifacts>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn complete(&self) -> impl Iterator<Item = &DocumentArtifacts> {
        self.documents.iter().filter(|d| d.is_complete())
    }

    /// Documents with at least one missing artifact, in scan order.
    pub fn to_process(&self) -> Vec<&DocumentArtifacts> {
        self.documents.iter().filter(|d| !d.is_complete()).collect()
    }

    pub fn step_count(&self) -> usize {
        self.documents
            .iter()
            .map(|d| d.presence().missing_count())
            .sum()
    }
}

/// Probe every user story under `root` and report its artifact status.
///
/// Fails only when the stories directory itself is missing; no document is
/// evaluated in that case.
pub fn scan(root: &Path, config: &Config, oracle: &dyn PresenceOracle) -> Result<ScanReport> {
    let documents = list_documents(root, config)?;

    let documents: Vec<DocumentArtifacts> = documents
        .iter()
        .map(|doc| {
            let artifacts = DocumentArtifacts::inspect(&doc.id, &config.layout, oracle);
            tracing::debug!(
                document = %doc.id,
                complete = artifacts.is_complete(),
                "scanned user story"
            );
            artifacts
        })
        .collect();

    let report = ScanReport {
        stories_dir: config.layout.stories_dir.clone(),
        documents,
    };
    tracing::info!(
        documents = report.documents.len(),
        to_process = report.to_process().len(),
        steps = report.step_count(),
        "scan complete"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
