//! Template variants and the ordered fallback chain used to find them

use std::fmt;

/// One of the four template directories, keyed by (styled, typed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKey {
    TailwindTs,
    Tailwind,
    NonTailwindTs,
    NonTailwind,
}

impl VariantKey {
    pub fn new(styled: bool, typed: bool) -> Self {
        match (styled, typed) {
            (true, true) => VariantKey::TailwindTs,
            (true, false) => VariantKey::Tailwind,
            (false, true) => VariantKey::NonTailwindTs,
            (false, false) => VariantKey::NonTailwind,
        }
    }

    /// Directory name under the template root
    pub fn dir_name(&self) -> &'static str {
        match self {
            VariantKey::TailwindTs => "tailwind-ts",
            VariantKey::Tailwind => "tailwind",
            VariantKey::NonTailwindTs => "non-tailwind-ts",
            VariantKey::NonTailwind => "non-tailwind",
        }
    }

    pub fn is_styled(&self) -> bool {
        matches!(self, VariantKey::TailwindTs | VariantKey::Tailwind)
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, VariantKey::TailwindTs | VariantKey::NonTailwindTs)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Variant keys to try, best match first
///
/// The exact match leads; typed projects then fall back through both typed
/// variants before either untyped one.
pub fn candidate_keys(styled: bool, typed: bool) -> &'static [VariantKey] {
    use VariantKey::*;
    match (styled, typed) {
        (true, true) => &[TailwindTs, NonTailwindTs, Tailwind, NonTailwind],
        (false, true) => &[NonTailwindTs, TailwindTs, Tailwind, NonTailwind],
        (true, false) => &[Tailwind, NonTailwind],
        (false, false) => &[NonTailwind, Tailwind],
    }
}

/// Template file extensions to try within one variant, best match first
pub fn template_extensions(typed: bool) -> &'static [&'static str] {
    if typed {
        &[".tsx", ".ts", ".js"]
    } else {
        &[".js"]
    }
}

/// The full (variant, extension) probe order; the first existing file wins
pub fn candidate_chain(styled: bool, typed: bool) -> Vec<(VariantKey, &'static str)> {
    candidate_keys(styled, typed)
        .iter()
        .flat_map(|key| {
            template_extensions(typed)
                .iter()
                .map(move |extension| (*key, *extension))
        })
        .collect()
}
