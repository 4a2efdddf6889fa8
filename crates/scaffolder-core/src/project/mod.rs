//! Project initialization: everything that happens after the questions
//!
//! Every step produces a [`StepOutcome`]; nothing is swallowed and nothing
//! aborts the process. Only a failed directory creation stops the run early,
//! since every later step writes into that directory.

pub mod report;

use crate::answers::AnswerSet;
use crate::config::generator;
use crate::runtime::tool::{CommandRunner, ToolManager};
use crate::templates::{copier, TemplateSource};
use chrono::Local;
use std::io;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub use report::{InitError, InitReport, Step, StepOutcome, StepReport};

pub const LOG_FILE: &str = "log.txt";
pub const SERVEMON_CONFIG_FILE: &str = "servemon.config.js";
pub const README_FILE: &str = "README.md";
pub const PACKAGE_JSON_FILE: &str = "package.json";

/// Materializes a project directory from an [`AnswerSet`]
pub struct ProjectInitializer<'a, R: CommandRunner> {
    source: &'a TemplateSource,
    tool: &'a ToolManager,
    runner: &'a R,
}

impl<'a, R: CommandRunner> ProjectInitializer<'a, R> {
    pub fn new(source: &'a TemplateSource, tool: &'a ToolManager, runner: &'a R) -> Self {
        Self {
            source,
            tool,
            runner,
        }
    }

    /// Run every step in order and report each outcome
    pub async fn run(&self, answers: &AnswerSet) -> InitReport {
        let mut report = InitReport::new();
        let target = answers.target_dir.as_path();

        let created = create_directory(target).await;
        let failed = created.is_failure();
        report.record(Step::CreateDirectory, created);
        if failed {
            report.skip_remaining(Step::CreateDirectory, "Project directory was not created");
            return report;
        }

        let record = generator::render_log_record(answers, &Local::now());
        report.record(Step::WriteLog, append_log(&target.join(LOG_FILE), &record).await);

        let servemon = if answers.use_servemon {
            write_file(
                &target.join(SERVEMON_CONFIG_FILE),
                &generator::render_servemon_config(),
            )
            .await
        } else {
            StepOutcome::Skipped("Servemon not selected".to_string())
        };
        report.record(Step::WriteServemonConfig, servemon);

        report.record(
            Step::WriteReadme,
            write_file(&target.join(README_FILE), "").await,
        );

        let package_json = match generator::render_package_json(&answers.project_name) {
            Ok(content) => write_file(&target.join(PACKAGE_JSON_FILE), &content).await,
            Err(error) => StepOutcome::Failed(InitError::Render {
                file: PACKAGE_JSON_FILE,
                error,
            }),
        };
        report.record(Step::WritePackageJson, package_json);

        report.record(Step::CopyTemplate, self.copy_template(answers).await);
        report.record(Step::InstallServemon, self.install_servemon(answers).await);

        report
    }

    async fn copy_template(&self, answers: &AnswerSet) -> StepOutcome {
        let kind = match answers.template_kind() {
            Some(kind) if self.source.has_template(kind) => kind,
            _ => {
                return StepOutcome::Warning(format!(
                    "Template not found: {}",
                    answers.template
                ))
            }
        };

        match copier::copy_template(self.source, kind, &answers.target_dir).await {
            Ok(files) => StepOutcome::Done(format!(
                "Copied {} files from the {} template",
                files.len(),
                kind
            )),
            Err(error) => StepOutcome::Failed(InitError::Copy {
                template: kind.to_string(),
                error,
            }),
        }
    }

    async fn install_servemon(&self, answers: &AnswerSet) -> StepOutcome {
        if !answers.install_servemon {
            return StepOutcome::Skipped("Installation not requested".to_string());
        }

        let Some(manager) = answers.package_manager_kind() else {
            return StepOutcome::Warning(format!(
                "Package manager not found: {}",
                answers.package_manager
            ));
        };

        match self.tool.install(self.runner, manager).await {
            Ok(()) => StepOutcome::Done(format!(
                "Installed {} with {}",
                self.tool.config().display_name,
                manager
            )),
            Err(error) => StepOutcome::Failed(InitError::Install {
                command: self.tool.install_command(manager),
                error,
            }),
        }
    }
}

/// Create the target directory, failing if it already exists
///
/// Missing parents are created first; the final component is created with a
/// non-recursive call so an existing entry is reported, never reused.
async fn create_directory(target: &Path) -> StepOutcome {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(error) = fs::create_dir_all(parent).await {
            return StepOutcome::Failed(InitError::CreateDir {
                path: parent.to_path_buf(),
                error,
            });
        }
    }

    match fs::create_dir(target).await {
        Ok(()) => StepOutcome::Done(format!("Created {}", target.display())),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            StepOutcome::Failed(InitError::TargetExists(target.to_path_buf()))
        }
        Err(error) => StepOutcome::Failed(InitError::CreateDir {
            path: target.to_path_buf(),
            error,
        }),
    }
}

/// Append a record to a log file, creating it if needed
pub async fn append_log(path: &Path, record: &str) -> StepOutcome {
    let result = async {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(record.as_bytes()).await?;
        file.flush().await
    }
    .await;

    match result {
        Ok(()) => StepOutcome::Done(format!("Appended to {}", path.display())),
        Err(error) => StepOutcome::Failed(InitError::Write {
            path: path.to_path_buf(),
            error,
        }),
    }
}

async fn write_file(path: &Path, content: &str) -> StepOutcome {
    match fs::write(path, content).await {
        Ok(()) => StepOutcome::Done(format!("Wrote {}", path.display())),
        Err(error) => StepOutcome::Failed(InitError::Write {
            path: path.to_path_buf(),
            error,
        }),
    }
}
