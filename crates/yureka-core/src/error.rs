//! Fatal error conditions surfaced to the user
//!
//! Recoverable situations (an unknown component name, a component that is not
//! installed) never become errors; the orchestrators fall back to interactive
//! selection instead. Everything in this enum ends the current command.

use crate::config::INIT_COMMAND;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YurekaError {
    #[error(
        "No package.json found in {}. Please run this command in your Next.js project root.",
        .0.display()
    )]
    MissingPackageJson(PathBuf),

    #[error(
        "Yureka UI is not initialized in this project. Please run \"{}\" first.",
        INIT_COMMAND
    )]
    NotInitialized,

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },
}

impl YurekaError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn remove(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
        }
    }
}
