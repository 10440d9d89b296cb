//! CSS module companions for unstyled components

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A class selector directly followed by its rule block: `.name {`
static CLASS_SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\w+)\s*\{").expect("class selector regex is valid"));

/// File name of a component's CSS module
pub fn stylesheet_file_name(display_name: &str) -> String {
    format!("{}.module.css", display_name)
}

/// File name of the type declaration for a component's CSS module
pub fn declaration_file_name(display_name: &str) -> String {
    format!("{}.module.css.d.ts", display_name)
}

/// Minimal stylesheet with one rule scoped by the lowercased name
pub fn skeleton_stylesheet(display_name: &str) -> String {
    format!(
        "/* {} component styles */\n\n.{} {{\n  /* Add your styles here */\n}}\n",
        display_name,
        display_name.to_lowercase()
    )
}

/// Class names that open a rule block, in first-seen order without repeats
pub fn class_names(css: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    CLASS_SELECTOR_RE
        .captures_iter(css)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Type declaration exposing each class of the stylesheet as a string field
pub fn type_declaration(css: &str) -> String {
    let mut out = String::from("declare const styles: {\n");
    for name in class_names(css) {
        out.push_str(&format!("  readonly {}: string;\n", name));
    }
    out.push_str("};\nexport default styles;\n");
    out
}
