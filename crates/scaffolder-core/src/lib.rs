//! Scaffolder Core - library behind `create-static-website`
//!
//! This library asks for (or receives) a small set of answers and turns them
//! into a new static website project: a directory holding a copy of a bundled
//! template, a `package.json`, an empty `README.md`, an optional servemon
//! config and an append-only `log.txt`. It can also install the servemon dev
//! server globally through npm, yarn or pnpm.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - answer validation, file rendering, template copying,
//!   runtime detection and companion tool installation
//! - **Layer 2: Workflow Orchestration** - `ProjectInitializer`, which runs every step and
//!   returns an `InitReport` with one outcome per step
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{AnswerSet, ProjectInitializer, TemplateSource};
//! use scaffolder_core::runtime::{servemon_tool, ShellRunner};
//!
//! let source = TemplateSource::Bundled;
//! let tool = servemon_tool();
//! let report = ProjectInitializer::new(&source, &tool, &ShellRunner)
//!     .run(&answers)
//!     .await;
//! assert!(!report.has_failures());
//! ```

pub mod answers;
pub mod config;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, PackageManager, TemplateKind};
pub use product::ProductConfig;
pub use project::{InitError, InitReport, ProjectInitializer, Step, StepOutcome};
pub use runtime::{CommandRunner, RuntimeInfo, ToolManager};
pub use templates::{copy_template, TemplateManifest, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;
