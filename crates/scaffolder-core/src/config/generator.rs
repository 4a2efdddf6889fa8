//! Rendering of the small files written next to the copied template

use crate::answers::AnswerSet;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Version written into every generated package.json
pub const PACKAGE_VERSION: &str = "0.0.1";

/// Start script pointing at the companion dev server
pub const START_SCRIPT: &str = "servemon dev";

/// Line closing every log record
pub const LOG_SEPARATOR: &str = "========================================================";

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'a str,
    scripts: Scripts<'a>,
}

#[derive(Serialize)]
struct Scripts<'a> {
    start: &'a str,
}

/// Render the package.json for a new project
pub fn render_package_json(project_name: &str) -> Result<String> {
    let manifest = PackageManifest {
        name: project_name,
        version: PACKAGE_VERSION,
        scripts: Scripts {
            start: START_SCRIPT,
        },
    };
    let mut json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize package.json")?;
    json.push('\n');
    Ok(json)
}

/// Render the servemon dev server configuration
pub fn render_servemon_config() -> String {
    [
        "module.exports = {",
        "  // Read servemon documentation here: servemon.netlify.app",
        "  port: 3000,",
        "  directory: './',",
        "  watch: true,",
        "};",
        "",
    ]
    .join("\n")
}

/// Render one record for the project's log.txt
pub fn render_log_record(answers: &AnswerSet, timestamp: &DateTime<Local>) -> String {
    format!(
        "Project name: {}\n\
         Project directory: {}\n\
         Author: {}\n\
         Template: {}\n\
         Servemon: {}\n\
         Date: {}\n\
         {}\n",
        answers.project_name,
        answers.target_dir.display(),
        answers.author,
        answers.template,
        answers.use_servemon,
        timestamp.format("%a %b %d %Y %H:%M:%S GMT%z"),
        LOG_SEPARATOR
    )
}
