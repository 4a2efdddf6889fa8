//! Per-step outcomes of a project initialization run

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The steps of a run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateDirectory,
    WriteLog,
    WriteServemonConfig,
    WriteReadme,
    WritePackageJson,
    CopyTemplate,
    InstallServemon,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::CreateDirectory,
        Step::WriteLog,
        Step::WriteServemonConfig,
        Step::WriteReadme,
        Step::WritePackageJson,
        Step::CopyTemplate,
        Step::InstallServemon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::CreateDirectory => "Project directory",
            Step::WriteLog => "log.txt",
            Step::WriteServemonConfig => "servemon.config.js",
            Step::WriteReadme => "README.md",
            Step::WritePackageJson => "package.json",
            Step::CopyTemplate => "Template files",
            Step::InstallServemon => "Servemon install",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Hard failures of a step
#[derive(Debug, Error)]
pub enum InitError {
    #[error("{} already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("Failed to create {}: {error}", .path.display())]
    CreateDir { path: PathBuf, error: io::Error },

    #[error("Failed to write {}: {error}", .path.display())]
    Write { path: PathBuf, error: io::Error },

    #[error("Failed to render {file}: {error:#}")]
    Render { file: &'static str, error: anyhow::Error },

    #[error("Failed to copy template {template}: {error:#}")]
    Copy {
        template: String,
        error: anyhow::Error,
    },

    #[error("`{command}` failed: {error:#}")]
    Install {
        command: String,
        error: anyhow::Error,
    },
}

/// What happened to one step
#[derive(Debug)]
pub enum StepOutcome {
    /// Step completed
    Done(String),
    /// Step intentionally not run (disabled by an answer, or an earlier failure)
    Skipped(String),
    /// Step not run because something it needed could not be resolved
    Warning(String),
    /// Step ran and failed
    Failed(InitError),
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Outcomes of every step of a run, in execution order
#[derive(Debug, Default)]
pub struct InitReport {
    steps: Vec<StepReport>,
}

impl InitReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.steps.push(StepReport { step, outcome });
    }

    /// Mark every step after `after` as skipped
    pub fn skip_remaining(&mut self, after: Step, reason: &str) {
        let later = Step::ALL
            .iter()
            .skip_while(|step| **step != after)
            .skip(1)
            .copied();
        for step in later {
            self.record(step, StepOutcome::Skipped(reason.to_string()));
        }
    }

    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .map(|report| &report.outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|report| report.outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_remaining_covers_later_steps_only() {
        let mut report = InitReport::new();
        report.record(
            Step::CreateDirectory,
            StepOutcome::Failed(InitError::TargetExists(PathBuf::from("site"))),
        );
        report.skip_remaining(Step::CreateDirectory, "no directory");

        assert_eq!(report.steps().len(), Step::ALL.len());
        assert!(report.has_failures());
        assert_eq!(report.failures().count(), 1);
        assert!(matches!(
            report.outcome(Step::InstallServemon),
            Some(StepOutcome::Skipped(reason)) if reason == "no directory"
        ));
    }

    #[test]
    fn test_warnings_are_not_failures() {
        let mut report = InitReport::new();
        report.record(Step::CopyTemplate, StepOutcome::Warning("missing".into()));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_error_messages() {
        let err = InitError::TargetExists(PathBuf::from("site"));
        assert_eq!(err.to_string(), "site already exists");

        let err = InitError::Install {
            command: "npm install -g servemon".to_string(),
            error: anyhow::anyhow!("exit code 1"),
        };
        assert_eq!(err.to_string(), "`npm install -g servemon` failed: exit code 1");
    }
}
