//! Bundled template trees, their manifests, and copying
//!
//! This module provides:
//! - Template sources (bundled into the binary, or a local directory)
//! - Template manifest parsing (`template.yaml`)
//! - Recursive copying of a template tree into a project directory
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod source;
pub mod version;

pub use copier::copy_template;
pub use manifest::TemplateManifest;
pub use source::TemplateSource;
pub use version::check_compatibility;
