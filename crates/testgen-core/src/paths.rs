use crate::types::ArtifactKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STORIES_DIR: &str = "docs/user-stories";
pub const PLANS_DIR: &str = "docs/test-plans";
pub const SUITES_DIR: &str = "docs/test-suites";
pub const CASES_DIR: &str = "docs/test-cases";
pub const TEMPLATES_DIR: &str = "docs/templates";

pub const CONFIG_FILE: &str = "testgen.yaml";

pub const STORY_SUFFIX: &str = ".us.txt";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Join a root-relative directory and a file name with `/`, the form shown
/// to users and pasted into agent prompts.
pub fn join_display(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

// ---------------------------------------------------------------------------
// Document ids
// ---------------------------------------------------------------------------

/// Derive a document id from a user story filename.
///
/// `EN2_Login.us.txt` becomes `EN2_Login`. Names without the suffix, or
/// consisting of nothing but the suffix, are not user stories.
pub fn document_id(filename: &str) -> Option<&str> {
    filename
        .strip_suffix(STORY_SUFFIX)
        .filter(|id| !id.is_empty())
}

pub fn story_filename(document: &str) -> String {
    format!("{document}{STORY_SUFFIX}")
}

pub fn artifact_filename(document: &str, kind: ArtifactKind) -> String {
    format!("{document}{}", kind.suffix())
}

/// Final path component of a `/`-joined display path.
pub fn display_file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
