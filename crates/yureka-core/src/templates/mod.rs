//! Component templates
//!
//! This module provides:
//! - Template variants and their fallback chain
//! - Template sources (bundled or a local directory)
//! - Resolution of a component name to the files to write
//! - Synthesized defaults and CSS module companions

pub mod defaults;
pub mod resolver;
pub mod source;
pub mod stylesheet;
pub mod variant;

pub use resolver::{ResolvedTemplate, TemplateFile, TemplateOrigin, TemplateResolver};
pub use source::TemplateSource;
pub use variant::{candidate_chain, VariantKey};
