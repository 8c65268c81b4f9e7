use crate::error::{Result, TestgenError};
use crate::paths;
use crate::types::ArtifactKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Root-relative directories holding user stories and their artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_stories_dir")]
    pub stories_dir: String,
    #[serde(default = "default_plans_dir")]
    pub plans_dir: String,
    #[serde(default = "default_suites_dir")]
    pub suites_dir: String,
    #[serde(default = "default_cases_dir")]
    pub cases_dir: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

fn default_stories_dir() -> String {
    paths::STORIES_DIR.to_string()
}

fn default_plans_dir() -> String {
    paths::PLANS_DIR.to_string()
}

fn default_suites_dir() -> String {
    paths::SUITES_DIR.to_string()
}

fn default_cases_dir() -> String {
    paths::CASES_DIR.to_string()
}

fn default_templates_dir() -> String {
    paths::TEMPLATES_DIR.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stories_dir: default_stories_dir(),
            plans_dir: default_plans_dir(),
            suites_dir: default_suites_dir(),
            cases_dir: default_cases_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl LayoutConfig {
    pub fn stories_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.stories_dir)
    }

    pub fn artifact_dir(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Plan => &self.plans_dir,
            ArtifactKind::Suite => &self.suites_dir,
            ArtifactKind::Cases => &self.cases_dir,
        }
    }

    pub fn story_path(&self, document: &str) -> String {
        paths::join_display(&self.stories_dir, &paths::story_filename(document))
    }

    pub fn artifact_path(&self, document: &str, kind: ArtifactKind) -> String {
        paths::join_display(
            self.artifact_dir(kind),
            &paths::artifact_filename(document, kind),
        )
    }

    pub fn template_path(&self, kind: ArtifactKind) -> String {
        paths::join_display(&self.templates_dir, kind.template())
    }
}

// ---------------------------------------------------------------------------
// AgentsConfig
// ---------------------------------------------------------------------------

/// Chat agent handle asked to produce each artifact kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_plan_agent")]
    pub plan: String,
    #[serde(default = "default_suite_agent")]
    pub suite: String,
    #[serde(default = "default_cases_agent")]
    pub cases: String,
}

fn default_plan_agent() -> String {
    "@testplan_agent".to_string()
}

fn default_suite_agent() -> String {
    "@testplan2testsuite_agent".to_string()
}

fn default_cases_agent() -> String {
    "@testsuite2testcase_agent".to_string()
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            plan: default_plan_agent(),
            suite: default_suite_agent(),
            cases: default_cases_agent(),
        }
    }
}

impl AgentsConfig {
    pub fn agent_for(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Plan => &self.plan,
            ArtifactKind::Suite => &self.suite,
            ArtifactKind::Cases => &self.cases,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Contents of `testgen.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub agents: AgentsConfig,
}

impl Config {
    /// Load `testgen.yaml` from `root`, falling back to defaults when the
    /// file does not exist. A file that exists but does not parse is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        // An empty file deserializes to unit, not to a mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Write a default `testgen.yaml`. Refuses to overwrite unless `force`.
    pub fn init(root: &Path, force: bool) -> Result<PathBuf> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(&Self::default())?;
        if force {
            crate::io::atomic_write(&path, data.as_bytes())?;
        } else if !crate::io::write_if_missing(&path, data.as_bytes())? {
            return Err(TestgenError::ConfigExists(path));
        }
        Ok(path)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let layout = &self.layout;

        if layout.stories_dir.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "layout.stories_dir is empty".to_string(),
            });
        }

        for &kind in ArtifactKind::all() {
            let dir = layout.artifact_dir(kind);
            if dir.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "layout directory for {} is empty; artifacts resolve against the project root",
                        kind.title()
                    ),
                });
            } else if dir.trim_end_matches('/') == layout.stories_dir.trim_end_matches('/') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "{} directory '{}' is the same as the user stories directory",
                        kind.title(),
                        dir
                    ),
                });
            }

            let agent = self.agents.agent_for(kind);
            if agent.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("agents.{} is empty", kind.as_str()),
                });
            } else if !agent.starts_with('@') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "agents.{} '{}' does not start with '@'; chat agents are addressed as @name",
                        kind.as_str(),
                        agent
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
