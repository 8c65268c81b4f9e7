use crate::artifact::DocumentArtifacts;
use crate::config::Config;
use crate::paths;
use crate::planner::GenerationStep;
use crate::scan::ScanReport;
use crate::types::ArtifactKind;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GenerationCommand
// ---------------------------------------------------------------------------

/// A planned step expressed as a chat command for the generation agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCommand {
    pub step: u32,
    pub kind: ArtifactKind,
    pub title: String,
    pub agent: String,
    pub prompt: String,
    pub output_file: String,
    /// Output paths of artifacts generated earlier in the same run.
    pub dependencies: Vec<String>,
    pub wait_message: String,
}

impl GenerationCommand {
    /// The text to paste into the chat: agent handle followed by the prompt.
    pub fn invocation(&self) -> String {
        format!("{} {}", self.agent, self.prompt)
    }

    pub fn output_file_name(&self) -> &str {
        paths::display_file_name(&self.output_file)
    }
}

pub fn build_command(
    step: &GenerationStep,
    doc: &DocumentArtifacts,
    config: &Config,
) -> GenerationCommand {
    let output_file = doc.status(step.kind).path.clone();
    let dependencies = step
        .prerequisites
        .iter()
        .map(|&k| doc.status(k).path.clone())
        .collect();

    GenerationCommand {
        step: step.sequence_number,
        kind: step.kind,
        title: step.title(),
        agent: config.agents.agent_for(step.kind).to_string(),
        prompt: prompt_for(step.kind, doc, config),
        output_file,
        dependencies,
        wait_message: format!(
            "Waiting for {} generation...",
            step.kind.title().to_lowercase()
        ),
    }
}

fn prompt_for(kind: ArtifactKind, doc: &DocumentArtifacts, config: &Config) -> String {
    let story = &doc.source_path;
    let plan = &doc.plan.path;
    let suite = &doc.suite.path;
    let output = &doc.status(kind).path;
    let template = config.layout.template_path(kind);

    match kind {
        ArtifactKind::Plan => format!(
            "Please analyze the user story in `{story}` and create a comprehensive test plan \
             following the format shown in `{template}`. Save the output as `{output}`."
        ),
        ArtifactKind::Suite => format!(
            "Please analyze the user story in `{story}` and the test plan in `{plan}`, then \
             create a comprehensive test suite following the format shown in `{template}`. \
             Save the output as `{output}`."
        ),
        ArtifactKind::Cases => format!(
            "Please analyze the user story in `{story}`, the test plan in `{plan}`, and the \
             test suite in `{suite}`, then create Azure-formatted test cases following the \
             format shown in `{template}`. Save the output as `{output}`."
        ),
    }
}

// ---------------------------------------------------------------------------
// DocumentPlan
// ---------------------------------------------------------------------------

/// Every command needed to complete one user story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub document: String,
    pub source_path: String,
    pub commands: Vec<GenerationCommand>,
}

pub fn plan_document(doc: &DocumentArtifacts, config: &Config) -> DocumentPlan {
    let commands = doc
        .steps()
        .iter()
        .map(|step| build_command(step, doc, config))
        .collect();

    DocumentPlan {
        document: doc.document.clone(),
        source_path: doc.source_path.clone(),
        commands,
    }
}

/// Plans for every incomplete document in `report`, in scan order.
pub fn plan_report(report: &ScanReport, config: &Config) -> Vec<DocumentPlan> {
    report
        .to_process()
        .into_iter()
        .map(|doc| plan_document(doc, config))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::presence::StaticPresence;

    fn doc(oracle: &StaticPresence) -> DocumentArtifacts {
        DocumentArtifacts::inspect("EN2_Login", &LayoutConfig::default(), oracle)
    }

    #[test]
    fn full_plan_commands() {
        let config = Config::default();
        let plan = plan_document(&doc(&StaticPresence::new()), &config);
        assert_eq!(plan.commands.len(), 3);

        let [p, s, c] = [&plan.commands[0], &plan.commands[1], &plan.commands[2]];
        assert_eq!((p.step, s.step, c.step), (1, 2, 3));
        assert_eq!(p.agent, "@testplan_agent");
        assert_eq!(s.agent, "@testplan2testsuite_agent");
        assert_eq!(c.agent, "@testsuite2testcase_agent");
        assert!(p.dependencies.is_empty());
        assert_eq!(s.dependencies, ["docs/test-plans/EN2_Login_TestPlan.txt"]);
        assert_eq!(
            c.dependencies,
            [
                "docs/test-plans/EN2_Login_TestPlan.txt",
                "docs/test-suites/EN2_Login_TestSuite.md"
            ]
        );
        assert_eq!(c.title, "Generate Test Cases");
        assert_eq!(c.output_file_name(), "EN2_Login_TestCases.csv");
        assert_eq!(p.wait_message, "Waiting for test plan generation...");
    }

    #[test]
    fn prompts_reference_inputs_and_template() {
        let config = Config::default();
        let plan = plan_document(&doc(&StaticPresence::new()), &config);
        let cases = &plan.commands[2];

        assert!(cases
            .prompt
            .contains("`docs/user-stories/EN2_Login.us.txt`"));
        assert!(cases
            .prompt
            .contains("`docs/test-suites/EN2_Login_TestSuite.md`"));
        assert!(cases
            .prompt
            .contains("`docs/templates/testcase_example.csv`"));
        assert!(cases
            .prompt
            .ends_with("Save the output as `docs/test-cases/EN2_Login_TestCases.csv`."));
        assert!(cases.invocation().starts_with("@testsuite2testcase_agent Please analyze"));
    }

    #[test]
    fn existing_artifacts_are_not_dependencies() {
        let oracle = StaticPresence::new().with("EN2_Login", ArtifactKind::Plan);
        let plan = plan_document(&doc(&oracle), &Config::default());

        assert_eq!(plan.commands.len(), 2);
        assert_eq!(plan.commands[0].kind, ArtifactKind::Suite);
        assert_eq!(plan.commands[0].step, 1);
        assert!(plan.commands[0].dependencies.is_empty());
        // The suite prompt still points at the existing plan as input.
        assert!(plan.commands[0]
            .prompt
            .contains("docs/test-plans/EN2_Login_TestPlan.txt"));
        assert_eq!(
            plan.commands[1].dependencies,
            ["docs/test-suites/EN2_Login_TestSuite.md"]
        );
    }

    #[test]
    fn configured_agents_are_used() {
        let mut config = Config::default();
        config.agents.cases = "@azure_cases".to_string();
        let oracle = StaticPresence::new()
            .with("EN2_Login", ArtifactKind::Plan)
            .with("EN2_Login", ArtifactKind::Suite);
        let plan = plan_document(&doc(&oracle), &config);
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].agent, "@azure_cases");
    }
}
