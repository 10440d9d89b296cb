//! Yureka Core - Component scaffolding for Yureka UI
//!
//! This library copies UI component templates into a host web project, adapting
//! them to whether the project uses Tailwind and whether it uses TypeScript, and
//! keeps a barrel index file in sync with the installed components.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Project probing, extension policy, template
//!   resolution and barrel editing
//! - **Layer 2: Workflow Orchestration** - `init`, `add` and `remove` driven
//!   through the [`commands::Prompter`] trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use yureka_core::{commands, config::ProjectLayout, templates::TemplateResolver};
//!
//! let layout = ProjectLayout::new("./my-app");
//! let resolver = TemplateResolver::default();
//! let outcome =
//!     commands::add_component(&layout, &resolver, Some("button"), &mut my_prompter, "0.1.0")
//!         .await?;
//! ```

pub mod barrel;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod project;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::ComponentInfo;
pub use commands::{add_component, init_project, remove_component, Prompter};
pub use config::ProjectLayout;
pub use error::YurekaError;
pub use project::{ProjectConfig, SourceExtension};
pub use templates::{TemplateResolver, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::{run_add, run_init, run_remove};
