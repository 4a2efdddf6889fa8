//! Generated project files

pub mod generator;

pub use generator::{render_log_record, render_package_json, render_servemon_config};
