//! The generated barrel file re-exporting every installed component
//!
//! Edits are line oriented: the file is split into lines, each line is parsed
//! for an `export { default as <Name> }` clause, and the identifier is
//! compared exactly. `Button` therefore never touches `ButtonGroup`.

use crate::error::YurekaError;
use crate::project::SourceExtension;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use tracing::debug;

/// Written at the top of a freshly created barrel
pub const HEADER: &str = "// Yureka UI Components\n\
                          // This file is automatically generated for all UI components\n";

/// Barrel extensions in the order an existing file is picked up
const BARREL_EXTENSIONS: [SourceExtension; 4] = [
    SourceExtension::Tsx,
    SourceExtension::Jsx,
    SourceExtension::Js,
    SourceExtension::Ts,
];

static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*export\s*\{\s*default\s+as\s+([A-Za-z_$][\w$]*)\s*\}")
        .expect("export regex is valid")
});

/// The export line for a component, without a trailing newline
pub fn export_line(display_name: &str) -> String {
    format!(
        "export {{ default as {} }} from './{}';",
        display_name, display_name
    )
}

/// The component a line re-exports, if it is an entry line
pub fn entry_name(line: &str) -> Option<&str> {
    EXPORT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Component names exported by a barrel, in file order
pub fn entries(content: &str) -> Vec<&str> {
    content.lines().filter_map(entry_name).collect()
}

pub fn contains_entry(content: &str, display_name: &str) -> bool {
    content
        .lines()
        .any(|line| entry_name(line) == Some(display_name))
}

/// Content with an entry appended, or None if the entry already exists
///
/// A file that does not end in a newline keeps not ending in one, so a later
/// [`without_entry`] restores it byte for byte.
pub fn with_entry(content: &str, display_name: &str) -> Option<String> {
    if contains_entry(content, display_name) {
        return None;
    }

    let mut updated = content.to_string();
    let unterminated = !updated.is_empty() && !updated.ends_with('\n');
    if unterminated {
        updated.push('\n');
    }
    updated.push_str(&export_line(display_name));
    if !unterminated {
        updated.push('\n');
    }
    Some(updated)
}

/// Content with every entry for `display_name` dropped, and how many were dropped
pub fn without_entry(content: &str, display_name: &str) -> (String, usize) {
    let mut removed = 0;
    let mut last_removed = false;
    let mut kept: String = content
        .split_inclusive('\n')
        .filter(|line| {
            let matches = entry_name(line) == Some(display_name);
            if matches {
                removed += 1;
            }
            last_removed = matches;
            !matches
        })
        .collect();

    // An unterminated final entry took the file's missing newline with it
    if last_removed && !content.ends_with('\n') && kept.ends_with('\n') {
        kept.pop();
    }
    (kept, removed)
}

/// Existing barrel files in the generated root, in pickup order
pub fn find_existing(ui_root: &Path) -> Vec<PathBuf> {
    BARREL_EXTENSIONS
        .iter()
        .map(|ext| barrel_path(ui_root, *ext))
        .filter(|path| path.is_file())
        .collect()
}

/// The barrel to write to: an existing one if present, else `index<preferred>`
pub fn locate(ui_root: &Path, preferred: SourceExtension) -> PathBuf {
    find_existing(ui_root)
        .into_iter()
        .next()
        .unwrap_or_else(|| barrel_path(ui_root, preferred))
}

pub fn barrel_path(ui_root: &Path, extension: SourceExtension) -> PathBuf {
    ui_root.join(format!("index{}", extension))
}

async fn read_or_header(path: &Path) -> Result<String> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HEADER.to_string()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Create the barrel with only its header unless it already exists
pub async fn ensure(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, HEADER)
        .await
        .map_err(|e| YurekaError::write(path, e))?;
    Ok(())
}

/// Add an export for a component; returns false if it was already present
pub async fn add_entry(path: &Path, display_name: &str) -> Result<bool> {
    let current = read_or_header(path).await?;
    let Some(updated) = with_entry(&current, display_name) else {
        debug!(barrel = %path.display(), component = display_name, "entry already present");
        return Ok(false);
    };

    fs::write(path, updated)
        .await
        .map_err(|e| YurekaError::write(path, e))?;
    debug!(barrel = %path.display(), component = display_name, "entry added");
    Ok(true)
}

/// Result of removing a component's export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Entry lines dropped (normally 0 or 1)
    pub removed: usize,
    /// Whether any other component is still exported
    pub has_entries: bool,
}

/// Remove a component's export lines; a missing barrel is left alone
pub async fn remove_entry(path: &Path, display_name: &str) -> Result<RemoveOutcome> {
    let current = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RemoveOutcome {
                removed: 0,
                has_entries: false,
            });
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let (updated, removed) = without_entry(&current, display_name);
    if removed > 0 {
        fs::write(path, &updated)
            .await
            .map_err(|e| YurekaError::write(path, e))?;
    }
    debug!(barrel = %path.display(), component = display_name, removed, "entry removed");

    Ok(RemoveOutcome {
        removed,
        has_entries: !entries(&updated).is_empty(),
    })
}
