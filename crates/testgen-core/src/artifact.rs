use crate::config::LayoutConfig;
use crate::planner::{plan_steps, GenerationStep};
use crate::presence::PresenceOracle;
use crate::types::ArtifactKind;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

/// Existence flags for one document's three artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub plan: bool,
    pub suite: bool,
    pub cases: bool,
}

impl Presence {
    pub fn new(plan: bool, suite: bool, cases: bool) -> Self {
        Self { plan, suite, cases }
    }

    pub fn exists(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Plan => self.plan,
            ArtifactKind::Suite => self.suite,
            ArtifactKind::Cases => self.cases,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.plan && self.suite && self.cases
    }

    pub fn missing_count(&self) -> usize {
        ArtifactKind::all()
            .iter()
            .filter(|&&k| !self.exists(k))
            .count()
    }
}

// ---------------------------------------------------------------------------
// ArtifactStatus
// ---------------------------------------------------------------------------

/// Snapshot of one artifact of one document, taken during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactStatus {
    pub document: String,
    pub kind: ArtifactKind,
    /// Root-relative output path. Opaque to planning.
    pub path: String,
    pub exists: bool,
}

// ---------------------------------------------------------------------------
// DocumentArtifacts
// ---------------------------------------------------------------------------

/// A user story and the status of each of its derived artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentArtifacts {
    pub document: String,
    pub source_path: String,
    pub plan: ArtifactStatus,
    pub suite: ArtifactStatus,
    pub cases: ArtifactStatus,
}

impl DocumentArtifacts {
    /// Query `oracle` once per artifact kind for `document`.
    pub fn inspect(document: &str, layout: &LayoutConfig, oracle: &dyn PresenceOracle) -> Self {
        let status = |kind: ArtifactKind| ArtifactStatus {
            document: document.to_string(),
            kind,
            path: layout.artifact_path(document, kind),
            exists: oracle.exists(document, kind),
        };

        Self {
            document: document.to_string(),
            source_path: layout.story_path(document),
            plan: status(ArtifactKind::Plan),
            suite: status(ArtifactKind::Suite),
            cases: status(ArtifactKind::Cases),
        }
    }

    pub fn status(&self, kind: ArtifactKind) -> &ArtifactStatus {
        match kind {
            ArtifactKind::Plan => &self.plan,
            ArtifactKind::Suite => &self.suite,
            ArtifactKind::Cases => &self.cases,
        }
    }

    pub fn statuses(&self) -> [&ArtifactStatus; 3] {
        [&self.plan, &self.suite, &self.cases]
    }

    pub fn presence(&self) -> Presence {
        Presence::new(self.plan.exists, self.suite.exists, self.cases.exists)
    }

    pub fn is_complete(&self) -> bool {
        self.presence().is_complete()
    }

    pub fn steps(&self) -> Vec<GenerationStep> {
        plan_steps(self.presence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::StaticPresence;
    use std::cell::RefCell;

    struct CountingOracle {
        inner: StaticPresence,
        calls: RefCell<Vec<(String, ArtifactKind)>>,
    }

    impl PresenceOracle for CountingOracle {
        fn exists(&self, document: &str, kind: ArtifactKind) -> bool {
            self.calls.borrow_mut().push((document.to_string(), kind));
            self.inner.exists(document, kind)
        }
    }

    #[test]
    fn presence_helpers() {
        let p = Presence::new(true, false, true);
        assert!(p.exists(ArtifactKind::Plan));
        assert!(!p.exists(ArtifactKind::Suite));
        assert_eq!(p.missing_count(), 1);
        assert!(!p.is_complete());
        assert!(Presence::new(true, true, true).is_complete());
    }

    #[test]
    fn inspect_queries_each_kind_once() {
        let oracle = CountingOracle {
            inner: StaticPresence::new().with("EN2_Login", ArtifactKind::Plan),
            calls: RefCell::new(Vec::new()),
        };
        let doc = DocumentArtifacts::inspect("EN2_Login", &LayoutConfig::default(), &oracle);

        let calls = oracle.calls.borrow();
        assert_eq!(calls.len(), 3);
        for &kind in ArtifactKind::all() {
            assert_eq!(calls.iter().filter(|(_, k)| *k == kind).count(), 1);
        }
        assert_eq!(doc.presence(), Presence::new(true, false, false));
    }

    #[test]
    fn inspect_records_paths() {
        let doc = DocumentArtifacts::inspect(
            "EN2_Login",
            &LayoutConfig::default(),
            &StaticPresence::new(),
        );
        assert_eq!(doc.source_path, "docs/user-stories/EN2_Login.us.txt");
        assert_eq!(
            doc.status(ArtifactKind::Cases).path,
            "docs/test-cases/EN2_Login_TestCases.csv"
        );
        assert!(doc.statuses().iter().all(|s| s.document == "EN2_Login"));
        assert!(!doc.is_complete());
        assert_eq!(doc.steps().len(), 3);
    }
}
