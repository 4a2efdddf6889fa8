//! Companion tool management
//!
//! Checks whether the companion dev server is on PATH and installs it globally
//! through the package manager the user picked. Shell invocations go through
//! [`CommandRunner`] so the project initializer never spawns processes itself.

use crate::answers::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Global installs hit the registry, so allow a couple of minutes
const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Grace period for the process to exit once its output is closed
const EXIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a shell command to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, command: &str) -> Result<()>;
}

/// Runs commands through `sh -c`, streaming their output indented
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<()> {
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!();

        let mut child = TokioCommand::new("sh")
            .arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn: {}", command))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow::anyhow!("Failed to capture stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| anyhow::anyhow!("Failed to capture stderr"))?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Command timed out after {} seconds: {}",
                INSTALL_TIMEOUT.as_secs(),
                command
            );
        }

        match timeout(EXIT_TIMEOUT, child.wait()).await {
            Ok(Ok(status)) => {
                println!();
                if status.success() {
                    Ok(())
                } else {
                    anyhow::bail!(
                        "Command failed with exit code {}: {}",
                        status.code().unwrap_or(-1),
                        command
                    );
                }
            }
            Ok(Err(e)) => anyhow::bail!("Failed to wait for command: {}", e),
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("Command hung after closing its output: {}", command);
            }
        }
    }
}

/// Configuration for the companion tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Package name in the npm registry
    pub package: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// Checks for and installs the companion tool
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Global install command for the given package manager
    pub fn install_command(&self, manager: PackageManager) -> String {
        manager.global_install_command(self.config.package)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
    }

    /// Install the tool globally using `runner`
    pub async fn install<R: CommandRunner>(
        &self,
        runner: &R,
        manager: PackageManager,
    ) -> Result<()> {
        runner.run(&self.install_command(manager)).await
    }
}

/// Pre-configured tool manager for servemon
pub fn servemon_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "servemon",
        display_name: "Servemon",
        package: "servemon",
        docs_url: "https://servemon.netlify.app",
    })
}
