//! Turns the presence of a document's three artifacts into numbered
//! generation steps.
//!
//! Steps follow [`ArtifactKind`] order and are numbered densely: only
//! missing artifacts get a step, so a document missing its suite and cases
//! gets steps 1 and 2, never 2 and 3.

use crate::artifact::Presence;
use crate::types::ArtifactKind;
use serde::{Deserialize, Serialize};

/// One "produce this missing artifact" unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStep {
    /// 1-based position among the steps planned for the same document.
    pub sequence_number: u32,
    pub kind: ArtifactKind,
    /// Earlier kinds that are also generated in this run, in kind order.
    /// Kinds whose artifact already exists are never listed.
    pub prerequisites: Vec<ArtifactKind>,
}

impl GenerationStep {
    pub fn title(&self) -> String {
        format!("Generate {}", self.kind.title())
    }
}

/// Plan the steps for one document. Total over every presence combination.
pub fn plan_steps(presence: Presence) -> Vec<GenerationStep> {
    let mut steps: Vec<GenerationStep> = Vec::new();
    let mut n = 0;

    for &kind in ArtifactKind::all() {
        if presence.exists(kind) {
            continue;
        }
        n += 1;
        let prerequisites = steps.iter().map(|s| s.kind).collect();
        steps.push(GenerationStep {
            sequence_number: n,
            kind,
            prerequisites,
        });
    }

    steps
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtifactKind::{Cases, Plan, Suite};

    fn step(
        sequence_number: u32,
        kind: ArtifactKind,
        prerequisites: &[ArtifactKind],
    ) -> GenerationStep {
        GenerationStep {
            sequence_number,
            kind,
            prerequisites: prerequisites.to_vec(),
        }
    }

    fn all_presences() -> Vec<Presence> {
        let mut out = Vec::new();
        for plan in [false, true] {
            for suite in [false, true] {
                for cases in [false, true] {
                    out.push(Presence::new(plan, suite, cases));
                }
            }
        }
        out
    }

    #[test]
    fn nothing_exists_plans_all_three() {
        let steps = plan_steps(Presence::new(false, false, false));
        assert_eq!(
            steps,
            vec![
                step(1, Plan, &[]),
                step(2, Suite, &[Plan]),
                step(3, Cases, &[Plan, Suite]),
            ]
        );
    }

    #[test]
    fn everything_exists_plans_nothing() {
        assert!(plan_steps(Presence::new(true, true, true)).is_empty());
    }

    #[test]
    fn existing_plan_renumbers_from_suite() {
        let steps = plan_steps(Presence::new(true, false, false));
        assert_eq!(steps, vec![step(1, Suite, &[]), step(2, Cases, &[Suite])]);
    }

    #[test]
    fn only_cases_missing() {
        let steps = plan_steps(Presence::new(true, true, false));
        assert_eq!(steps, vec![step(1, Cases, &[])]);
    }

    #[test]
    fn only_plan_missing_leaves_downstream_alone() {
        let steps = plan_steps(Presence::new(false, true, true));
        assert_eq!(steps, vec![step(1, Plan, &[])]);
    }

    #[test]
    fn missing_plan_and_cases_skip_suite() {
        let steps = plan_steps(Presence::new(false, true, false));
        assert_eq!(steps, vec![step(1, Plan, &[]), step(2, Cases, &[Plan])]);
    }

    #[test]
    fn step_count_and_order_for_every_input() {
        for presence in all_presences() {
            let steps = plan_steps(presence);
            let expected: Vec<ArtifactKind> = ArtifactKind::all()
                .iter()
                .copied()
                .filter(|&k| !presence.exists(k))
                .collect();

            assert_eq!(steps.len(), presence.missing_count(), "{presence:?}");
            assert_eq!(
                steps.iter().map(|s| s.kind).collect::<Vec<_>>(),
                expected,
                "{presence:?}"
            );
            for (i, s) in steps.iter().enumerate() {
                assert_eq!(s.sequence_number as usize, i + 1, "{presence:?}");
            }
        }
    }

    #[test]
    fn prerequisites_are_earlier_and_generated() {
        for presence in all_presences() {
            let steps = plan_steps(presence);
            let emitted: Vec<ArtifactKind> = steps.iter().map(|s| s.kind).collect();
            for s in &steps {
                for p in &s.prerequisites {
                    assert!(*p < s.kind, "{presence:?}: {p} not before {}", s.kind);
                    assert!(emitted.contains(p), "{presence:?}: {p} not generated");
                    assert!(!presence.exists(*p), "{presence:?}: {p} already exists");
                }
                let expected: Vec<ArtifactKind> =
                    emitted.iter().copied().filter(|k| *k < s.kind).collect();
                assert_eq!(s.prerequisites, expected, "{presence:?}");
            }
        }
    }

    #[test]
    fn planning_is_idempotent() {
        for presence in all_presences() {
            assert_eq!(plan_steps(presence), plan_steps(presence));
        }
    }

    #[test]
    fn empty_plan_iff_complete() {
        for presence in all_presences() {
            assert_eq!(plan_steps(presence).is_empty(), presence.is_complete());
        }
    }

    #[test]
    fn step_titles() {
        assert_eq!(step(1, Plan, &[]).title(), "Generate Test Plan");
        assert_eq!(step(1, Cases, &[]).title(), "Generate Test Cases");
    }
}
