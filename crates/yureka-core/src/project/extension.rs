//! File extension policy for generated components and the barrel file

use std::fmt;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Extension of a generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceExtension {
    Js,
    Jsx,
    Ts,
    Tsx,
}

impl SourceExtension {
    /// Extension including the leading dot
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceExtension::Js => ".js",
            SourceExtension::Jsx => ".jsx",
            SourceExtension::Ts => ".ts",
            SourceExtension::Tsx => ".tsx",
        }
    }

    /// Whether files with this extension are type checked
    pub fn is_typed(&self) -> bool {
        matches!(self, SourceExtension::Ts | SourceExtension::Tsx)
    }

    /// Whether the extension permits markup (the `x` variants)
    pub fn supports_markup(&self) -> bool {
        matches!(self, SourceExtension::Jsx | SourceExtension::Tsx)
    }

    /// Extension for index and barrel files that accompany sources of this extension
    ///
    /// Markup extensions are reused verbatim; anything else becomes `.js`
    /// because the barrel itself carries no markup.
    pub fn manifest_extension(&self) -> SourceExtension {
        if self.supports_markup() {
            *self
        } else {
            SourceExtension::Js
        }
    }

    /// Default for a project with no established convention
    pub fn default_for(typed: bool) -> SourceExtension {
        if typed {
            SourceExtension::Tsx
        } else {
            SourceExtension::Js
        }
    }
}

impl fmt::Display for SourceExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choose the source extension for new component files
///
/// The convention already present in `dirs` wins over the typed/untyped
/// default: `.tsx` then `.ts` (typed projects only), then `.jsx`.
pub fn choose_source_extension<P: AsRef<Path>>(dirs: &[P], typed: bool) -> SourceExtension {
    let names = top_level_file_names(dirs);
    let any_ends_with = |suffix: &str| names.iter().any(|name| name.ends_with(suffix));

    let chosen = if typed && any_ends_with(".tsx") {
        SourceExtension::Tsx
    } else if typed && any_ends_with(".ts") {
        SourceExtension::Ts
    } else if any_ends_with(".jsx") {
        SourceExtension::Jsx
    } else {
        SourceExtension::default_for(typed)
    };

    debug!(typed, extension = %chosen, "source extension chosen");
    chosen
}

/// Names of regular files directly inside each directory; missing directories are skipped
fn top_level_file_names<P: AsRef<Path>>(dirs: &[P]) -> Vec<String> {
    dirs.iter()
        .filter(|dir| dir.as_ref().is_dir())
        .flat_map(|dir| {
            WalkDir::new(dir.as_ref())
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        })
        .collect()
}
