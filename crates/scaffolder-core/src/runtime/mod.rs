//! Runtime detection and companion tool management
//!
//! This module provides:
//! - Node.js and package manager detection
//! - Installation of the servemon dev server through a package manager

pub mod check;
pub mod tool;

pub use check::{check_node, check_package_manager, RuntimeInfo};
pub use tool::{servemon_tool, CommandRunner, ShellRunner, ToolConfig, ToolManager};
