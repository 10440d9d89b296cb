//! Template resolution: pick the best variant for a project, or synthesize one

use super::defaults;
use super::source::TemplateSource;
use super::stylesheet;
use super::variant::{candidate_chain, VariantKey};
use crate::project::SourceExtension;
use anyhow::Result;
use std::fmt;
use tracing::debug;

/// One file to be written into the component directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name relative to the component directory
    pub name: String,
    pub content: String,
}

impl TemplateFile {
    fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Where the component body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    Template {
        key: VariantKey,
        extension: &'static str,
    },
    Default,
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateOrigin::Template { key, extension } => write!(f, "{}/*{}", key, extension),
            TemplateOrigin::Default => f.write_str("built-in default"),
        }
    }
}

impl TemplateOrigin {
    /// Whether the component body uses framework classes rather than a CSS module
    ///
    /// A matched template answers for itself; a synthesized default follows
    /// the requested axis.
    pub fn is_styled(&self, requested: bool) -> bool {
        match self {
            TemplateOrigin::Template { key, .. } => key.is_styled(),
            TemplateOrigin::Default => requested,
        }
    }
}

/// Files for one component, component source first
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub origin: TemplateOrigin,
    pub files: Vec<TemplateFile>,
}

impl ResolvedTemplate {
    pub fn file(&self, name: &str) -> Option<&TemplateFile> {
        self.files.iter().find(|f| f.name == name)
    }
}

/// Resolves component templates against a [`TemplateSource`]
#[derive(Debug, Clone, Default)]
pub struct TemplateResolver {
    source: TemplateSource,
}

impl TemplateResolver {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// Resolve the files for `display_name`
    ///
    /// `extension` only names the written component file; the `typed` axis
    /// decides which templates are eligible. Companion stylesheets follow the
    /// variant that matched, which may be unstyled in a styled project.
    pub fn resolve(
        &self,
        display_name: &str,
        styled: bool,
        typed: bool,
        extension: SourceExtension,
    ) -> Result<ResolvedTemplate> {
        let (origin, component) = match self.find_component(display_name, styled, typed)? {
            Some((key, ext, content)) => (
                TemplateOrigin::Template {
                    key,
                    extension: ext,
                },
                content,
            ),
            None => (
                TemplateOrigin::Default,
                defaults::default_component(display_name, styled, typed),
            ),
        };
        debug!(component = display_name, %origin, "template resolved");

        let mut files = vec![TemplateFile::new(
            format!("{}{}", display_name, extension),
            component,
        )];

        if !origin.is_styled(styled) {
            let css = self.companion_stylesheet(display_name, origin)?;
            if typed {
                files.push(TemplateFile::new(
                    stylesheet::declaration_file_name(display_name),
                    stylesheet::type_declaration(&css),
                ));
            }
            files.insert(
                1,
                TemplateFile::new(stylesheet::stylesheet_file_name(display_name), css),
            );
        }

        Ok(ResolvedTemplate { origin, files })
    }

    /// Walk the (variant, extension) chain and return the first template found
    fn find_component(
        &self,
        display_name: &str,
        styled: bool,
        typed: bool,
    ) -> Result<Option<(VariantKey, &'static str, String)>> {
        for (key, ext) in candidate_chain(styled, typed) {
            let file_name = format!("{}{}", display_name, ext);
            if let Some(content) = self.source.read(key, &file_name)? {
                return Ok(Some((key, ext, content)));
            }
        }
        Ok(None)
    }

    /// Stylesheet beside the matched template, else a synthesized one
    fn companion_stylesheet(&self, display_name: &str, origin: TemplateOrigin) -> Result<String> {
        let file_name = stylesheet::stylesheet_file_name(display_name);
        match origin {
            TemplateOrigin::Template { key, .. } => Ok(self
                .source
                .read(key, &file_name)?
                .unwrap_or_else(|| stylesheet::skeleton_stylesheet(display_name))),
            TemplateOrigin::Default => Ok(defaults::default_stylesheet(display_name)),
        }
    }
}
