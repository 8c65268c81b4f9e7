use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// The three derived artifacts of a user story, in dependency order.
///
/// A plan is produced before its suite, and both before the cases. The
/// derived `Ord` follows declaration order and is relied on by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Plan,
    Suite,
    Cases,
}

impl ArtifactKind {
    pub fn all() -> &'static [ArtifactKind] {
        &[ArtifactKind::Plan, ArtifactKind::Suite, ArtifactKind::Cases]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Plan => "plan",
            ArtifactKind::Suite => "suite",
            ArtifactKind::Cases => "cases",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ArtifactKind::Plan => "Test Plan",
            ArtifactKind::Suite => "Test Suite",
            ArtifactKind::Cases => "Test Cases",
        }
    }

    /// Suffix appended to a document id to name this artifact's file.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Plan => "_TestPlan.txt",
            ArtifactKind::Suite => "_TestSuite.md",
            ArtifactKind::Cases => "_TestCases.csv",
        }
    }

    /// Example file the generation agent is asked to follow.
    pub fn template(self) -> &'static str {
        match self {
            ArtifactKind::Plan => "testplan_example.txt",
            ArtifactKind::Suite => "testsuite_example.md",
            ArtifactKind::Cases => "testcase_example.csv",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RunMode
// ---------------------------------------------------------------------------

/// How the workflow instructions are presented. Never affects planning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Follow the steps in sequence without pausing.
    #[default]
    Guided,
    /// Pause after each step to review its output.
    Review,
}

impl RunMode {
    pub fn from_review_flag(review: bool) -> Self {
        if review {
            RunMode::Review
        } else {
            RunMode::Guided
        }
    }

    pub fn is_review(self) -> bool {
        self == RunMode::Review
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Guided => "guided",
            RunMode::Review => "review",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordering() {
        assert!(ArtifactKind::Plan < ArtifactKind::Suite);
        assert!(ArtifactKind::Suite < ArtifactKind::Cases);
        let mut sorted = ArtifactKind::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, ArtifactKind::all());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ArtifactKind::Cases).unwrap();
        assert_eq!(json, "\"cases\"");
    }

    #[test]
    fn run_mode_from_flag() {
        assert_eq!(RunMode::from_review_flag(true), RunMode::Review);
        assert_eq!(RunMode::from_review_flag(false), RunMode::Guided);
        assert_eq!(RunMode::default(), RunMode::Guided);
        assert!(RunMode::Review.is_review());
    }
}
