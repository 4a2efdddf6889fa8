//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to give the scaffolding flow its identity
//! and its product-specific text.

use crate::answers::AnswerSet;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable that points at a local template directory
    fn template_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, answers: &AnswerSet) -> Vec<String>;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
